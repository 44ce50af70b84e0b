use anyhow::Context;

use flexpane::{GeometryLog, LayoutNode, MonospaceMeasure};

const TOOLBAR: &str = r##"{
    "id": "toolbar",
    "style": {
        "width": "100%",
        "height": 120,
        "padding": 8,
        "flexWrap": "wrap",
        "justifyContent": "space-between",
        "background": "#20242c"
    },
    "content": {
        "open": { "style": { "width": 90, "height": 32 } },
        "save": { "style": { "width": 90, "height": 32 } },
        "title": {
            "style": { "padding": 6, "fontSize": 14 },
            "content": "Untitled document, not yet saved"
        },
        "close": {
            "style": { "width": 24, "height": 24, "position": "topRight" }
        }
    }
}"##;

fn main() -> anyhow::Result<()> {
    flexpane::init_logging();

    let mut layout = LayoutNode::from_json(TOOLBAR).context("parsing toolbar")?;
    let mut measurer = MonospaceMeasure::default();
    let mut log = GeometryLog::new();

    for width in [640.0, 320.0, 640.0, 640.0, 0.0] {
        log.clear();
        layout
            .resolve(width, 200.0, &mut measurer, &mut log)
            .with_context(|| format!("resolving at {width}px"))?;

        println!("-- {width}px: {} change(s)", log.len());
        for change in &log.changes {
            let g = &change.geometry;
            println!(
                "  {:<8} visible={:<5} pos={} size={} scale={}",
                change.key.as_deref().unwrap_or("-"),
                g.visible,
                g.position,
                g.size,
                g.scale,
            );
        }
    }

    Ok(())
}
