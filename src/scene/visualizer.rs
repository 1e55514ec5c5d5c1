use super::FunnelLayout;
use crate::geometry::Connector;
use itertools::Itertools;

/// Formats a complete `FunnelLayout` into a human-readable string for debugging.
pub fn describe(layout: &FunnelLayout) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "======== FUNNEL LAYOUT {}x{} ========\n",
        layout.dimensions.width, layout.dimensions.height
    ));

    if let Some(reason) = layout.skipped {
        output.push_str(&format!("(no geometry: {:?})\n", reason));
        return output;
    }

    output.push_str(&format!(
        "bucket width {:.2}, content height {:.2}, y scale {:.4}\n",
        layout.bucket_width, layout.content_height, layout.y_scale
    ));

    for step in &layout.steps {
        output.push_str(&format!("\n--- STEP {} '{}' @ x={:.2} ---\n", step.index, step.title, step.x));
        for bucket in layout.buckets.iter().filter(|b| b.step == step.index) {
            output.push_str(&format!(
                "  [{}] '{}' value={} y={:.2} h={:.2} out={:.2} in={:.2}\n",
                bucket.id,
                bucket.title,
                bucket.value,
                bucket.y,
                bucket.height,
                bucket.from_offset,
                bucket.to_offset
            ));
            let sources = layout
                .flows_into(bucket.index)
                .filter_map(|f| layout.bucket(f.from))
                .map(|b| b.id.as_str())
                .join(", ");
            if !sources.is_empty() {
                output.push_str(&format!("      fed by: {}\n", sources));
            }
            if let Some(drop) = layout.drop_of(bucket.index) {
                output.push_str(&format!(
                    "      drop '{}' value={} h={:.2} ({})\n",
                    drop.title, drop.value, drop.height, drop.geometry.label.text
                ));
            }
        }
    }

    if !layout.flows.is_empty() {
        output.push_str("\n--- FLOWS ---\n");
        for flow in &layout.flows {
            let shape = match &flow.geometry.connector {
                Connector::Straight { .. } => "straight",
                Connector::Curved {
                    extension: Some(_), ..
                } => "curved+extension",
                Connector::Curved { .. } => "curved",
            };
            output.push_str(&format!(
                "  {:<24} h={:.2} from+{:.2} to+{:.2} {:>7} {}\n",
                flow.id,
                flow.height,
                flow.from_offset,
                flow.to_offset,
                flow.geometry.label.text,
                shape
            ));
            output.push_str(&format!(
                "      d=\"{}\"\n",
                flow.geometry.connector.to_path_data(flow.geometry.origin_x)
            ));
        }
    }

    output.push_str("\n================ END OF LAYOUT ================\n");
    output
}
