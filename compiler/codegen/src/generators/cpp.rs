use model::MessageTypeModel;

use super::{summary, GENERATED_BANNER};
use crate::utils::{namespace_segments, upper_constant_name};

pub(super) fn relative_path(model: &MessageTypeModel) -> String {
    format!("{}.h", model.class_name())
}

fn include_guard(model: &MessageTypeModel) -> String {
    let mut parts: Vec<String> =
        namespace_segments(model.namespace()).iter().map(|s| s.to_uppercase()).collect();
    parts.push(model.class_name().to_uppercase());
    format!("{}_H_", parts.join("_"))
}

pub(super) fn render(model: &MessageTypeModel) -> String {
    let guard = include_guard(model);
    let segments = namespace_segments(model.namespace());

    let mut out = format!("// {}\n\n#ifndef {guard}\n#define {guard}\n\n", GENERATED_BANNER);
    out.push_str("#include <cstdint>\n\n");
    for segment in &segments {
        out.push_str(&format!("namespace {} {{\n", segment));
    }
    out.push('\n');
    out.push_str(&format!("/// {}\n", summary(model)));
    out.push_str(&format!("enum class {} : uint32_t {{\n", model.class_name()));
    for entry in model.entries() {
        out.push_str(&format!(
            "    {} = {},\n",
            upper_constant_name(model.name(), entry.name()),
            entry.id()
        ));
    }
    out.push_str("};\n\n");
    for segment in segments.iter().rev() {
        out.push_str(&format!("}}  // namespace {}\n", segment));
    }
    out.push_str(&format!("\n#endif  // {guard}\n"));
    out
}
