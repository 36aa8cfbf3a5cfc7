use model::MessageTypeModel;

use crate::utils::{namespace_segments, pascal_member_name, pascal_to_snake_case};

// Go tooling recognises generated files by this exact marker.
const GO_BANNER: &str = "Code generated by wirecode. DO NOT EDIT.";

pub(super) fn relative_path(model: &MessageTypeModel) -> String {
    format!("{}.go", pascal_to_snake_case(model.class_name()))
}

fn package_name(model: &MessageTypeModel) -> String {
    namespace_segments(model.namespace())
        .last()
        .map(|s| s.to_lowercase().replace('-', "_"))
        .unwrap_or_else(|| "codec".to_string())
}

pub(super) fn render(model: &MessageTypeModel) -> String {
    let class = model.class_name();

    let mut out = format!("// {}\n\npackage {}\n\n", GO_BANNER, package_name(model));
    out.push_str(&format!(
        "// {} enumerates the message types of the {} service.\n",
        class,
        model.name()
    ));
    out.push_str(&format!("type {} uint32\n\nconst (\n", class));
    for entry in model.entries() {
        out.push_str(&format!(
            "\t{} {} = {}\n",
            pascal_member_name(model.name(), entry.name()),
            class,
            entry.id()
        ));
    }
    out.push_str(")\n");
    out
}
