use model::MessageTypeModel;

use super::{summary, GENERATED_BANNER};
use crate::utils::pascal_member_name;

pub(super) fn relative_path(model: &MessageTypeModel) -> String {
    format!("{}.cs", model.class_name())
}

pub(super) fn render(model: &MessageTypeModel) -> String {
    let mut out = format!("// {}\n\nnamespace {}\n{{\n", GENERATED_BANNER, model.namespace());
    out.push_str(&format!("    /// <summary>{}</summary>\n", summary(model)));
    out.push_str(&format!("    internal enum {} : uint\n    {{\n", model.class_name()));
    for entry in model.entries() {
        out.push_str(&format!(
            "        {} = {},\n",
            pascal_member_name(model.name(), entry.name()),
            entry.id()
        ));
    }
    out.push_str("    }\n}\n");
    out
}
