use model::MessageTypeModel;

use super::{summary, GENERATED_BANNER};
use crate::utils::{namespace_segments, pascal_to_snake_case, upper_constant_name};

pub(super) fn relative_path(model: &MessageTypeModel) -> String {
    let module = pascal_to_snake_case(model.class_name());
    let mut parts: Vec<String> =
        namespace_segments(model.namespace()).iter().map(|s| s.to_string()).collect();
    parts.push(format!("{}.py", module));
    parts.join("/")
}

pub(super) fn render(model: &MessageTypeModel) -> String {
    let mut out = format!("# {}\n\"\"\"{}\"\"\"\n\n\n", GENERATED_BANNER, summary(model));
    out.push_str(&format!("class {}(object):\n", model.class_name()));
    for entry in model.entries() {
        out.push_str(&format!(
            "    {} = {}\n",
            upper_constant_name(model.name(), entry.name()),
            entry.id()
        ));
    }
    out
}
