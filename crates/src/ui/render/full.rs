use crate::ui::model::Model;
use crate::ui::render::modeline::render_modeline_padded;

/// Status box, content area and modeline, exactly one screen tall.
pub fn render_full(m: &Model) -> String {
    let mut screen = m.render_status_block();
    screen.extend(m.render_main_content().lines().map(str::to_string));
    let modeline = render_modeline_padded(m);
    screen.push(modeline.lines().next().unwrap_or_default().to_string());
    screen.join("\n")
}

#[cfg(test)]
mod tests {
    use crate::loader::Document;
    use crate::tree::{Element, ElementKind};
    use crate::ui::model::{initial_model, sample_doc, Model, STATUS_BLOCK_LINES};
    use crate::ui::Msg;
    use regex::Regex;

    fn strip_ansi(s: &str) -> String {
        let re = Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").unwrap();
        re.replace_all(s, "").to_string()
    }

    // fifty buttons: several pages on any of the sizes below
    fn button_wall() -> Document {
        let buttons = (1..=50)
            .map(|i| {
                let text = format!("Button {i}");
                Element::new(&format!("b{i}"), ElementKind::Ordinary, &text)
            })
            .collect();
        Document {
            root: Some(Element::new("dlg", ElementKind::Container, "").with_children(buttons)),
            ..Default::default()
        }
    }

    fn screen(m: &Model) -> Vec<String> {
        strip_ansi(&m.render_full())
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn screen_is_exactly_terminal_sized() {
        for (w, h) in [(80usize, 24usize), (100, 10), (40, 20), (30, 6)] {
            let mut m = initial_model(button_wall());
            m.update(Msg::WindowSize {
                width: w,
                height: h,
            });
            let lines = screen(&m);
            assert_eq!(lines.len(), h, "{w}x{h}:\n{}", lines.join("\n"));
            for (i, line) in lines.iter().enumerate() {
                assert_eq!(line.chars().count(), w, "{w}x{h} line {i}: `{line}`");
            }
        }
    }

    #[test]
    fn status_on_top_modeline_at_the_bottom() {
        let mut m = initial_model(sample_doc());
        m.update(Msg::WindowSize {
            width: 80,
            height: 24,
        });
        let lines = screen(&m);
        let status = strip_ansi(&m.render_status_block().join("\n"));
        let status: Vec<&str> = status.lines().collect();
        assert_eq!(&lines[..STATUS_BLOCK_LINES], status.as_slice());
        assert!(lines[1].contains("> "), "{}", lines.join("\n"));

        let modeline = strip_ansi(&crate::ui::render_modeline_padded(&m));
        assert_eq!(lines.last().map(String::as_str), modeline.lines().next());
    }

    #[test]
    fn content_area_follows_the_page() {
        let mut m = initial_model(button_wall());
        m.update(Msg::WindowSize {
            width: 30,
            height: 10,
        });
        assert_eq!(m.per_page, 6);
        let lines = screen(&m);
        let content = &lines[STATUS_BLOCK_LINES..lines.len() - 1];
        assert_eq!(content.len(), 6);
        for (i, line) in content.iter().enumerate() {
            assert_eq!(line.trim_end(), format!("Button {}", i + 1));
        }
        assert!(lines[lines.len() - 1].trim_end().ends_with("1/9"));

        m.update(Msg::KeyDown);
        let lines = screen(&m);
        assert_eq!(lines[STATUS_BLOCK_LINES].trim_end(), "Button 7");
        assert!(lines[lines.len() - 1].trim_end().ends_with("2/9"));
    }
}
