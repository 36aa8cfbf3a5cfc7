use model::MessageTypeModel;

use super::{summary, GENERATED_BANNER};
use crate::utils::upper_constant_name;

pub(super) fn relative_path(model: &MessageTypeModel) -> String {
    format!("{}.ts", model.class_name())
}

pub(super) fn render(model: &MessageTypeModel) -> String {
    let mut out = format!("/* {} */\n\n", GENERATED_BANNER);
    out.push_str(&format!("/** {} Namespace: {} */\n", summary(model), model.namespace()));
    out.push_str(&format!("export enum {} {{\n", model.class_name()));
    for entry in model.entries() {
        out.push_str(&format!(
            "    {} = {},\n",
            upper_constant_name(model.name(), entry.name()),
            entry.id()
        ));
    }
    out.push_str("}\n");
    out
}
