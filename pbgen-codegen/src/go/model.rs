//! Per-collection record proxy generation.

use crate::error::CodegenError;
use crate::render::{MODEL_TEMPLATE, TemplateRenderer};
use pbgen_schema::ir::{CollectionModel, ResolvedField};
use serde::Serialize;

/// Generator for one file per collection.
pub struct ModelGenerator<'a> {
    renderer: &'a TemplateRenderer,
    package: &'a str,
}

/// Template context of a collection file.
#[derive(Debug, Serialize)]
struct ModelContext<'a> {
    package: &'a str,
    model: &'a str,
    constructor: String,
    name_constant: String,
    collection_name: &'a str,
    imports: Vec<ImportContext>,
    fields: Vec<FieldContext<'a>>,
}

#[derive(Debug, Serialize)]
struct ImportContext {
    path: String,
    alias: Option<String>,
}

#[derive(Debug, Serialize)]
struct FieldContext<'a> {
    name: &'a str,
    constant: String,
    kind: &'a str,
    exported_name: &'a str,
    getter_name: &'a str,
    setter_name: &'a str,
    go_type: &'static str,
    getter: &'static str,
    needs_cast: bool,
    getter_doc: &'a [String],
    setter_doc: &'a [String],
}

impl<'a> FieldContext<'a> {
    fn from_field(model: &CollectionModel, field: &'a ResolvedField) -> Self {
        Self {
            name: &field.name,
            constant: model.field_constant(field),
            kind: &field.kind,
            exported_name: &field.exported_name,
            getter_name: &field.getter_name,
            setter_name: &field.setter_name,
            go_type: field.go_type.as_str(),
            getter: field.getter.as_str(),
            needs_cast: field.needs_cast,
            getter_doc: &field.getter_doc,
            setter_doc: &field.setter_doc,
        }
    }
}

impl<'a> ModelGenerator<'a> {
    /// Creates a new model generator.
    #[must_use]
    pub const fn new(renderer: &'a TemplateRenderer, package: &'a str) -> Self {
        Self { renderer, package }
    }

    /// Generates the file for one collection.
    ///
    /// # Errors
    /// Returns `CodegenError::Template` if rendering fails.
    pub fn generate(&self, model: &CollectionModel) -> Result<String, CodegenError> {
        let imports = model
            .imports
            .snapshot()
            .into_iter()
            .map(|import| ImportContext {
                path: import.path,
                alias: import.alias,
            })
            .collect();

        let context = ModelContext {
            package: self.package,
            model: &model.name,
            constructor: model.constructor_name(),
            name_constant: model.name_constant(),
            collection_name: &model.collection_name,
            imports,
            fields: model
                .fields
                .iter()
                .map(|field| FieldContext::from_field(model, field))
                .collect(),
        };

        self.renderer.render(MODEL_TEMPLATE, &context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Templates;
    use pbgen_schema::types::{FieldDef, FieldKind};

    fn render(model: &CollectionModel) -> String {
        let renderer = TemplateRenderer::new(Templates::default()).expect("Failed to compile");
        ModelGenerator::new(&renderer, "collections")
            .generate(model)
            .expect("Failed to render")
    }

    #[test]
    fn test_generate_header_and_type() {
        let model = CollectionModel::build("blog posts", &[]).expect("Failed to build");
        let output = render(&model);

        assert!(output.starts_with("// Code generated by pb-gen. DO NOT EDIT.\n"));
        assert!(output.contains("package collections\n"));
        assert!(output.contains("const BlogPostsCollectionName = \"blog posts\"\n"));
        assert!(output.contains("type BlogPosts struct {\n\tcore.BaseRecordProxy\n}\n"));
        assert!(output.contains("func NewBlogPosts(record *core.Record) *BlogPosts {"));
    }

    #[test]
    fn test_generate_sorted_imports() {
        let model = CollectionModel::build(
            "events",
            &[
                FieldDef::new("meta", FieldKind::Json),
                FieldDef::new("starts", FieldKind::Date),
            ],
        )
        .expect("Failed to build");
        let output = render(&model);

        assert!(output.contains(
            "import (\n\t\"github.com/pocketbase/pocketbase/core\"\n\t\"github.com/pocketbase/pocketbase/tools/types\"\n)\n"
        ));
    }

    #[test]
    fn test_generate_plain_accessors() {
        let model = CollectionModel::build("posts", &[FieldDef::new("views", FieldKind::Number)])
            .expect("Failed to build");
        let output = render(&model);

        assert!(output.contains("\tPostsFieldViews = \"views\"\n"));
        assert!(output.contains(
            "// GetViews returns the value of the \"views\" field\n\
             func (m *Posts) GetViews() int {\n\
             \treturn m.Record.GetInt(\"views\")\n\
             }\n"
        ));
        assert!(output.contains(
            "// SetViews sets the value of the \"views\" field\n\
             func (m *Posts) SetViews(value int) {\n\
             \tm.Record.Set(\"views\", value)\n\
             }\n"
        ));
    }

    #[test]
    fn test_generate_cast_accessor() {
        let model = CollectionModel::build("posts", &[FieldDef::new("meta", FieldKind::Json)])
            .expect("Failed to build");
        let output = render(&model);

        assert!(output.contains("func (m *Posts) GetMeta() types.JSONRaw {\n"));
        assert!(output.contains(
            "\tvalue, _ := m.Record.Get(\"meta\").(types.JSONRaw)\n\treturn value\n"
        ));
    }

    #[test]
    fn test_generate_multi_line_docs() {
        let model = CollectionModel::build(
            "posts",
            &[FieldDef::new(
                "author",
                FieldKind::Relation {
                    multiple: false,
                    collection_id: "_pb_users_auth_".to_string(),
                },
            )],
        )
        .expect("Failed to build");
        let output = render(&model);

        assert!(output.contains(
            "// GetAuthor returns the value of the \"author\" field\n\
             // Related collection: \"_pb_users_auth_\"\n\
             func (m *Posts) GetAuthor() string {"
        ));
    }
}
