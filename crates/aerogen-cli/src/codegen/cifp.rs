//! C# model and parser generation for fixed-width CIFP sections.

use super::csharp_types::{csharp_type, push_doc_lines};
use aerogen_core::CifpConfig;
use aerogen_core::section::{SectionField, SectionModel};

/// Generate the record class of a section.
///
/// Fields follow the layout's row order. Reserved fields keep their
/// documentation but the declaration is commented out.
pub fn generate_model(model: &SectionModel, config: &CifpConfig, source: &str) -> String {
    let mut code = String::new();

    code.push_str("using System;\n");
    code.push_str("using System.Collections.Generic;\n\n");
    code.push_str(&format!("namespace {}\n{{\n", config.model_namespace));

    code.push_str("    /// <summary>\n");
    push_doc_lines(
        &mut code,
        "    ",
        &format!(
            "{} File - {} ({}) section data",
            config.source_title, model.section_name, model.section_id
        ),
    );
    code.push_str("    /// </summary>\n");
    code.push_str("    /// <remarks>\n");
    push_doc_lines(&mut code, "    ", &format!("Generated from {source}"));
    code.push_str("    /// </remarks>\n");
    code.push_str(&format!("    public class {}\n    {{\n", model.model_class()));

    for field in &model.fields {
        code.push('\n');
        push_field_docs(&mut code, field);
        match field.ty {
            Some(ty) => code.push_str(&format!(
                "        public {} {} {{ get; set; }}\n",
                csharp_type(ty),
                field.identifier()
            )),
            None => code.push_str(&format!(
                "        // public string {} {{ get; set; }}\n",
                field.identifier()
            )),
        }
    }

    code.push_str("    }\n}\n");
    code
}

fn push_field_docs(code: &mut String, field: &SectionField) {
    let spec = &field.spec;
    let index = spec.index.as_ref().map(ToString::to_string).unwrap_or_default();
    let length = spec.length.map(|l| l.to_string()).unwrap_or_default();

    let indent = "        ";
    code.push_str(&format!("{indent}/// <summary>\n"));
    push_doc_lines(code, indent, &spec.name);
    if field.is_live() {
        let reference = spec.reference_id.as_deref().unwrap_or_default();
        push_doc_lines(code, indent, &format!("_Ref: {reference}"));
    }
    code.push_str(&format!("{indent}/// _Idx: {index}\n"));
    code.push_str(&format!("{indent}/// _MaxLength: {length}\n"));
    if field.is_live() {
        push_doc_lines(code, indent, &format!("_DataType: {}", spec.data_type));
    }
    code.push_str(&format!("{indent}/// </summary>\n"));
    code.push_str(&format!("{indent}/// <remarks>\n"));
    push_doc_lines(code, indent, &spec.remarks);
    code.push_str(&format!("{indent}/// </remarks>\n"));
}

/// Generate the line parser of a section.
///
/// The parser owns its result list; each instance accumulates independently.
pub fn generate_parser(model: &SectionModel, config: &CifpConfig) -> String {
    let model_class = model.model_class();
    let mut code = String::new();

    code.push_str(&format!("using {};\n", config.model_namespace));
    code.push_str("using System;\n");
    code.push_str("using System.Collections.Generic;\n\n");
    code.push_str(&format!("namespace {}\n{{\n", config.parser_namespace));
    code.push_str(&format!("    public class {}\n    {{\n", model.parser_class()));
    code.push_str(&format!(
        "        private readonly List<{model_class}> _results = new();\n\n"
    ));

    code.push_str("        public void Parse(string line)\n        {\n");
    code.push_str(&format!(
        "            if (string.IsNullOrWhiteSpace(line) || line.Length < {})\n",
        config.min_line_length
    ));
    code.push_str("                return;\n\n");
    code.push_str(&format!("            var model = new {model_class}\n            {{\n"));

    for (field, offset, length) in model.sliced_fields() {
        if field.is_live() {
            code.push_str(&format!(
                "                {} = line.Substring({offset}, {length}).Trim(),\n",
                field.identifier()
            ));
        } else {
            code.push_str(&format!(
                "                // {}: line.Substring({offset}, {length})\n",
                field.spec.name
            ));
        }
    }

    code.push_str("            };\n\n");
    code.push_str("            _results.Add(model);\n");
    code.push_str("        }\n\n");
    code.push_str(&format!(
        "        public IReadOnlyList<{model_class}> GetParsedResults() => _results.AsReadOnly();\n"
    ));
    code.push_str("    }\n}\n");
    code
}
