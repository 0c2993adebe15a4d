use super::{LABEL_COLUMN, Panel, SLOT_COLUMN};
use crate::scene::SceneSink;
use std::fmt::Write;
use strum::IntoEnumIterator;
use wardrobe::{BodyPartSet, Slot};

fn draw_slot(out: &mut String, panel: &Panel, slot: Slot) {
    let (prev, next) = if panel.is_enabled(slot) {
        ("<", ">")
    } else {
        ("-", "-")
    };
    let _ = writeln!(
        out,
        "{:<sw$} [{prev}] {:<lw$} [{next}]",
        slot.to_string(),
        panel.label(slot),
        sw = SLOT_COLUMN,
        lw = LABEL_COLUMN,
    );
}

/// Text rendition of the customization screen.
pub fn render(panel: &Panel, mask: &BodyPartSet, scene: &SceneSink) -> String {
    let mut out = String::new();
    for slot in Slot::iter() {
        draw_slot(&mut out, panel, slot);
    }

    let _ = writeln!(out, "hidden body: {mask}");
    let visible: Vec<&str> = scene.visible_pieces().map(|h| h.as_str()).collect();
    let _ = writeln!(
        out,
        "worn: {}",
        if visible.is_empty() {
            "None".to_string()
        } else {
            visible.join(", ")
        }
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use wardrobe::{Request, SelectionEngine};

    fn engine() -> SelectionEngine<SceneSink> {
        let registry = config::default_config().unwrap().registry().unwrap();
        let sink = SceneSink::new(&registry);
        SelectionEngine::seeded(registry, sink, 1)
    }

    #[test]
    fn test_render_empty_wardrobe() {
        let engine = engine();
        let text = render(&Panel::new(), engine.mask(), engine.sink());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], format!("accessories  [<] {:<20} [>]", "Default"));
        assert_eq!(lines[5], format!("shoes        [<] {:<20} [>]", "Default"));
        assert_eq!(lines[6], "hidden body: None");
        assert_eq!(lines[7], "worn: None");
    }

    #[test]
    fn test_render_outfit_locks_separates() {
        let mut engine = engine();
        let mut panel = Panel::new();
        let change = engine.change(Slot::Outfit, Request::NEXT);
        panel.apply(&change, engine.state());

        let text = render(&panel, engine.mask(), engine.sink());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[2], format!("outfit       [<] {:<20} [>]", "Outfit_Jumpsuit"));
        for line in &lines[3..6] {
            assert!(line.contains("[-] Default"), "{line}");
            assert!(line.ends_with("[-]"), "{line}");
        }
        assert_eq!(
            lines[6],
            "hidden body: arms_upper, shoulders, torso_upper, torso_middle, torso_bottom, hips, legs_upper, legs_knee"
        );
        assert_eq!(lines[7], "worn: Outfit_Jumpsuit");
    }
}
