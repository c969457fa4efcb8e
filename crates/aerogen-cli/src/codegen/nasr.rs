//! C# models, parsers and driver snippet for NASR CSV domains.

use super::csharp_types::{csharp_type, field_expression, push_doc_lines, scalar_keyword};
use aerogen_core::NasrConfig;
use aerogen_core::domain::{DomainModel, DomainProperty};

const NO_REMARKS: &str = "NoRemarksYet";

/// Generate `<Domain>Models.cs`: the base class and every subtype class
pub fn generate_models(model: &DomainModel, config: &NasrConfig) -> String {
    let domain = &model.domain;
    let mut code = String::new();

    code.push_str(&format!("namespace {}\n{{\n", config.model_namespace));
    code.push_str(&format!("    public class {domain}DataModel\n    {{\n"));

    code.push_str("        #region Common Fields\n");
    code.push_str("        public class CommonFields\n        {\n");
    for property in &model.common {
        push_property(&mut code, property, NO_REMARKS);
    }
    code.push_str("        }\n        #endregion\n\n");

    let renamed_remark = format!(
        "PropertyName changed due to identical column name in other {}_*.csv files",
        domain.to_uppercase()
    );
    for subtype in &model.subtypes {
        code.push_str(&format!(
            "        #region {domain}_{} Fields\n",
            subtype.subtype
        ));
        code.push_str(&format!(
            "        public class {} : CommonFields\n        {{\n",
            subtype.class_name
        ));
        for property in &subtype.properties {
            let remark = if property.renamed {
                renamed_remark.as_str()
            } else {
                NO_REMARKS
            };
            push_property(&mut code, property, remark);
        }
        code.push_str("        }\n        #endregion\n\n");
    }

    code.push_str("    }\n}\n");
    code
}

fn push_property(code: &mut String, property: &DomainProperty, remark: &str) {
    let indent = "            ";
    code.push_str(&format!("{indent}/// <summary>\n"));
    code.push_str(&format!("{indent}/// NoTitleYet\n"));
    push_doc_lines(code, indent, &format!("_Src: {}", property.source));
    push_doc_lines(code, indent, &format!("_MaxLength: {}", property.max_length));
    code.push_str(&format!(
        "{indent}/// _DataType: {}\n",
        scalar_keyword(property.ty.scalar)
    ));
    code.push_str(&format!(
        "{indent}/// _Nullable: {}\n",
        if property.ty.nullable { "Yes" } else { "No" }
    ));
    code.push_str(&format!("{indent}/// </summary>\n"));
    code.push_str(&format!("{indent}/// <remarks>{remark}</remarks>\n"));
    code.push_str(&format!(
        "{indent}public {} {} {{ get; set; }}\n\n",
        csharp_type(property.ty),
        property.identifier
    ));
}

/// Generate `<Domain>Parser.cs`: one parse method per subtype plus the collection type
pub fn generate_parser(model: &DomainModel, config: &NasrConfig) -> String {
    let domain = &model.domain;
    let helper = &config.helper_class;
    let mut code = String::new();

    code.push_str(&format!("using {};\n", config.model_namespace));
    code.push_str("using System;\nusing System.Collections.Generic;\nusing System.IO;\n");
    code.push_str(&format!(
        "using static {}.{domain}DataModel;\n\n",
        config.model_namespace
    ));
    code.push_str(&format!("namespace {}\n{{\n", config.parser_namespace));
    code.push_str(&format!("    public class {domain}CsvParser\n    {{\n"));

    for subtype in &model.subtypes {
        let class = &subtype.class_name;
        code.push_str(&format!(
            "        public {domain}DataCollection Parse{class}(string filePath)\n        {{\n"
        ));
        code.push_str(&format!(
            "            var result = new {domain}DataCollection();\n\n"
        ));
        code.push_str(&format!("            result.{class} = {helper}.ProcessLines(\n"));
        code.push_str("                filePath,\n");
        code.push_str(&format!("                fields => new {class}\n                {{\n"));
        for assignment in &subtype.assignments {
            code.push_str(&format!(
                "                    {} = {},\n",
                assignment.identifier,
                field_expression(assignment.coercion, helper, &assignment.column)
            ));
        }
        code.push_str("                });\n\n");
        code.push_str("            return result;\n        }\n\n");
    }
    code.push_str("    }\n\n");

    code.push_str(&format!("    public class {domain}DataCollection\n    {{\n"));
    for subtype in &model.subtypes {
        let class = &subtype.class_name;
        code.push_str(&format!(
            "        public List<{class}> {class} {{ get; set; }} = new();\n"
        ));
    }
    code.push_str("    }\n}\n");
    code
}

/// Generate `Program.cs`: a driver snippet that parses every subtype file
pub fn generate_program(model: &DomainModel) -> String {
    let domain = &model.domain;
    let parser = format!("{}CsvParser", domain.to_lowercase());
    let collection = format!("allParsed{domain}Data");
    let mut code = String::new();

    code.push_str(&format!("Console.WriteLine(\"Parsing {domain} csv files\");\n"));
    code.push_str(&format!("{domain}CsvParser {parser} = new {domain}CsvParser();\n"));
    code.push_str(&format!(
        "{domain}DataCollection {collection} = new {domain}DataCollection();\n"
    ));
    for subtype in &model.subtypes {
        let class = &subtype.class_name;
        code.push_str(&format!(
            "{collection}.{class} = {parser}.Parse{class}(Path.Combine(userSelectedSourceDirectory, \"{}\")).{class};\n",
            subtype.file_name
        ));
    }
    code.push_str(&format!("\nConsole.WriteLine(\"Generating {domain}.json\");\n"));
    code.push_str(&format!(
        "Generate{domain}Json.Generate({collection}, userSelectedOutputDirectory);\n"
    ));
    code.push_str(&format!("Console.WriteLine(\"{domain} data created.\");\n"));
    code
}
