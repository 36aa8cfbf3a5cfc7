use model::MessageTypeModel;

use super::{summary, GENERATED_BANNER};
use crate::utils::upper_constant_name;

pub(super) fn relative_path(model: &MessageTypeModel) -> String {
    format!("{}/{}.java", model.namespace().replace('.', "/"), model.class_name())
}

pub(super) fn render(model: &MessageTypeModel) -> String {
    let mut out = format!("// {}\n\npackage {};\n\n", GENERATED_BANNER, model.namespace());

    out.push_str("/**\n");
    out.push_str(&format!(" * {}\n", summary(model)));
    if let Some(since) = model.since() {
        out.push_str(&format!(" *\n * @since {}\n", since));
    }
    out.push_str(" */\n");
    out.push_str(&format!("public enum {} {{\n\n", model.class_name()));

    let constants = model
        .entries()
        .iter()
        .map(|e| format!("    {}({})", upper_constant_name(model.name(), e.name()), e.id()))
        .collect::<Vec<_>>()
        .join(",\n");
    out.push_str(&constants);
    out.push_str(";\n\n");

    out.push_str("    private final int id;\n\n");
    out.push_str(&format!("    {}(int messageType) {{\n", model.class_name()));
    out.push_str("        this.id = messageType;\n");
    out.push_str("    }\n\n");
    out.push_str("    public int id() {\n");
    out.push_str("        return id;\n");
    out.push_str("    }\n");
    out.push_str("}\n");
    out
}
