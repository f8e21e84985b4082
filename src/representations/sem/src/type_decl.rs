use super::TemplateParam;
use source_files::Source;

#[derive(Clone, Debug)]
pub struct Type {
    pub name: String,
    /// Text of the `@display("...")` decoration, empty when undecorated.
    pub display: String,
    pub template_params: Vec<TemplateParam>,
    pub source: Source,
}
