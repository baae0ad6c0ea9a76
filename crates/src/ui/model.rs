use crate::acekey::fold;
use crate::label::{LabeledString, NEW_ACCEL_MARKER, OLD_ACCEL_MARKER};
use crate::loader::Document;
use crate::manager::Session;
use crate::tree::{apply, Element, ElementKind, Menu, WriteBack};
use bubbletea_widgets::Viewport;

// small constants reused by rendering code
pub const STATUS_BLOCK_LINES: usize = 3;
pub const MODELINE_LINES: usize = 1;
pub const RESERVED_LINES: usize = STATUS_BLOCK_LINES + MODELINE_LINES;
pub const DEFAULT_WIDTH: usize = 80;

/// What typing a segment's accelerator does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    SwitchTab { owner: String, index: usize },
    OpenMenu(String),
    Press(String),
}

/// One label on screen, as currently written on the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    /// Takes part in accelerator assignment, so its marker is highlighted.
    pub decorated: bool,
    /// Active page of a tab widget.
    pub current: bool,
    pub action: Option<Action>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub depth: usize,
    pub segments: Vec<Segment>,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Segment {
            text: text.to_string(),
            decorated: false,
            current: false,
            action: None,
        }
    }

    fn label(text: &str, action: Action) -> Self {
        Segment {
            text: text.to_string(),
            decorated: true,
            current: false,
            action: Some(action),
        }
    }
}

#[derive(Default)]
pub struct Model {
    /// Tree as loaded; programmer's-mode toggles recompute from here.
    pub pristine: Option<Element>,
    /// Tree with every write-back applied so far.
    pub tree: Option<Element>,
    pub session: Session,
    /// Open popup chain, innermost last.
    pub popups: Vec<String>,
    pub status: String,
    // pagination
    pub page: usize,
    pub per_page: usize,
    pub screen_width: usize,
    /// Content area; holds the rendered scope, scrolled one page at a time.
    pub vp: Viewport,
}

pub fn initial_model(doc: Document) -> Model {
    let mut m = Model {
        session: Session::from_settings(&doc.settings),
        pristine: doc.root.clone(),
        tree: doc.root,
        ..Default::default()
    };
    m.refresh();
    m
}

/// Accelerator a written-back text carries, programmer's-mode markers included.
pub fn effective_accelerator(raw: &str) -> Option<char> {
    if let Some(p) = raw.find(NEW_ACCEL_MARKER) {
        return raw[p + NEW_ACCEL_MARKER.len()..].chars().next().map(fold);
    }
    if raw.contains(OLD_ACCEL_MARKER) {
        // authored accelerator shown as dropped, nothing new assigned
        return None;
    }
    LabeledString::new(raw, None).accelerator()
}

fn element_action(el: &Element) -> Action {
    match &el.menu {
        Some(menu) => Action::OpenMenu(menu.id.clone()),
        None => Action::Press(el.id.clone()),
    }
}

fn walk(el: &Element, depth: usize, out: &mut Vec<Line>) {
    if !el.visible {
        return;
    }
    let mut segments = Vec::new();
    match el.kind {
        ElementKind::Container => {
            if !el.text.is_empty() {
                segments.push(Segment::plain(&el.text));
            }
        }
        ElementKind::Excluded => {
            let shown = if el.text.is_empty() { &el.id } else { &el.text };
            out.push(Line {
                depth,
                segments: vec![Segment::plain(&format!("[{shown}]"))],
            });
            return;
        }
        ElementKind::Tabs => {
            for (index, page) in el.children.iter().enumerate() {
                if page.text.is_empty() {
                    continue;
                }
                let mut seg = Segment::label(
                    &page.text,
                    Action::SwitchTab {
                        owner: el.id.clone(),
                        index,
                    },
                );
                seg.current = index == el.active;
                segments.push(seg);
            }
            out.push(Line { depth, segments });
            if let Some(page) = el.children.get(el.active) {
                for child in &page.children {
                    walk(child, depth + 1, out);
                }
            }
            return;
        }
        ElementKind::MenuBar => {
            for title in el.children.iter().filter(|t| t.visible && !t.text.is_empty()) {
                segments.push(Segment::label(&title.text, element_action(title)));
            }
            out.push(Line { depth, segments });
            return;
        }
        ElementKind::GroupHeading if !el.checkable => {
            segments.push(Segment::plain(&el.text));
        }
        ElementKind::Label if !el.buddy || el.rich_text => {
            segments.push(Segment::plain(&el.text));
        }
        _ => {
            if !el.text.is_empty() {
                segments.push(Segment::label(&el.text, element_action(el)));
            }
        }
    }
    let child_depth = if segments.is_empty() { depth } else { depth + 1 };
    if !segments.is_empty() {
        out.push(Line { depth, segments });
    }
    for child in &el.children {
        walk(child, child_depth, out);
    }
}

fn menu_lines(menu: &Menu) -> Vec<Line> {
    menu.items
        .iter()
        .map(|item| {
            let seg = if item.separator {
                Segment::plain("────")
            } else {
                let action = match &item.submenu {
                    Some(sub) => Action::OpenMenu(sub.id.clone()),
                    None => Action::Press(LabeledString::new(&item.text, None).display_text()),
                };
                Segment::label(&item.text, action)
            };
            Line {
                depth: 0,
                segments: vec![seg],
            }
        })
        .collect()
}

impl Model {
    // wrapper update that delegates to the update module
    pub fn update(&mut self, msg: crate::ui::Msg) {
        crate::ui::update::handle_update(self, msg);
    }

    /// Where the user is: the window, then every open popup.
    pub fn scope(&self) -> Vec<String> {
        let window = match &self.tree {
            Some(root) if !root.text.is_empty() => {
                LabeledString::new(&root.text, None).display_text()
            }
            Some(root) => root.id.clone(),
            None => "mnemo".to_string(),
        };
        std::iter::once(window).chain(self.popups.iter().cloned()).collect()
    }

    fn apply_writes(&mut self, writes: &[WriteBack]) -> usize {
        match self.tree.as_mut() {
            Some(root) => apply(root, writes),
            None => 0,
        }
    }

    /// Full pass over the display tree.
    pub fn refresh(&mut self) {
        if self.tree.is_none() {
            self.status = "no tree loaded".to_string();
        } else {
            let writes = self.session.manage(self.tree.as_ref());
            let n = self.apply_writes(&writes);
            self.status = format!("{n} labels updated");
        }
        self.sync_viewport();
    }

    /// Load the current scope into the viewport and scroll it to `page`.
    pub fn sync_viewport(&mut self) {
        let mut lines: Vec<String> = self
            .render_list_content()
            .lines()
            .map(str::to_string)
            .collect();
        if self.per_page > 0 {
            // the last page is filled so every page starts at a multiple of per_page
            let filled = lines.len().div_ceil(self.per_page).max(1) * self.per_page;
            lines.resize(filled, String::new());
        }
        self.vp.set_content_lines(lines);
        self.vp.set_y_offset(self.page * self.per_page);
    }

    /// Back to the authored texts, then a full pass.
    pub fn reset(&mut self) {
        self.tree = self.pristine.clone();
        self.popups.clear();
        self.page = 0;
        self.refresh();
    }

    pub fn toggle_programmers_mode(&mut self) {
        let on = !self.session.programmers_mode();
        self.session.set_programmers_mode(on);
        self.reset();
        let mode = if on { "programmer's mode" } else { "normal mode" };
        self.status = format!("{mode}: {}", self.status);
    }

    pub fn open_menu(&mut self, id: &str) {
        let Some(menu) = self.tree.as_ref().and_then(|t| t.find_menu(id)).cloned() else {
            self.status = format!("menu '{id}' not found");
            return;
        };
        let writes = self.session.about_to_show(&menu);
        let n = self.apply_writes(&writes);
        self.popups.push(id.to_string());
        self.page = 0;
        self.sync_viewport();
        self.status = if n == 0 {
            format!("opened {id}")
        } else {
            format!("opened {id}, {n} entries updated")
        };
    }

    pub fn close_menu(&mut self) -> bool {
        let closed = self.popups.pop().is_some();
        if closed {
            self.page = 0;
            self.sync_viewport();
        }
        closed
    }

    pub fn switch_tab(&mut self, owner: &str, index: usize) {
        for root in [self.tree.as_mut(), self.pristine.as_mut()].into_iter().flatten() {
            if let Some(tabs) = root.find_mut(owner) {
                tabs.active = index;
            }
        }
        self.popups.clear();
        self.page = 0;
        self.refresh();
    }

    /// First visible tab widget: id, active page, page count.
    pub fn first_tabs(&self) -> Option<(String, usize, usize)> {
        fn find(el: &Element) -> Option<&Element> {
            if !el.visible {
                return None;
            }
            if el.kind == ElementKind::Tabs && !el.children.is_empty() {
                return Some(el);
            }
            el.children.iter().find_map(find)
        }
        let tabs = find(self.tree.as_ref()?)?;
        Some((tabs.id.clone(), tabs.active, tabs.children.len()))
    }

    /// What the content area shows: the innermost open popup, else the tree.
    pub fn lines(&self) -> Vec<Line> {
        let Some(root) = self.tree.as_ref() else {
            return Vec::new();
        };
        if let Some(menu) = self.popups.last().and_then(|id| root.find_menu(id)) {
            return menu_lines(menu);
        }
        let mut out = Vec::new();
        walk(root, 0, &mut out);
        out
    }

    /// Trigger the first element of the current scope whose accelerator is `c`.
    pub fn activate(&mut self, c: char) -> bool {
        let key = fold(c);
        let hit = self
            .lines()
            .into_iter()
            .flat_map(|l| l.segments)
            .filter(|s| s.decorated)
            .find(|s| effective_accelerator(&s.text) == Some(key))
            .and_then(|s| s.action);
        match hit {
            Some(Action::SwitchTab { owner, index }) => self.switch_tab(&owner, index),
            Some(Action::OpenMenu(id)) => self.open_menu(&id),
            Some(Action::Press(what)) => self.status = format!("activated {what}"),
            None => {
                self.status = format!("no accelerator '{c}' here");
                return false;
            }
        }
        true
    }

    pub fn render_status_block(&self) -> Vec<String> {
        crate::ui::render::render_status_block(self)
    }

    pub fn render_list_content(&self) -> String {
        crate::ui::render::render_list_content(self)
    }

    pub fn render_main_content(&self) -> String {
        crate::ui::render::render_main_content(self)
    }

    pub fn render_full(&self) -> String {
        crate::ui::render::render_full(self)
    }
}

#[cfg(test)]
pub(crate) fn sample_doc() -> Document {
    use crate::tree::MenuItem;

    let file = Menu::new(
        "file",
        vec![
            MenuItem::new("&New"),
            MenuItem::separator(),
            MenuItem::new("Export").with_submenu(Menu::new(
                "export",
                vec![MenuItem::new("PDF"), MenuItem::new("PNG")],
            )),
            MenuItem::new("Quit\tCtrl+Q"),
        ],
    );
    let root = Element::new("win", ElementKind::Container, "Settings").with_children(vec![
        Element::new("bar", ElementKind::MenuBar, "").with_children(vec![
            Element::new("t-file", ElementKind::MenuTitle, "&File").with_menu(file),
            Element::new("t-view", ElementKind::MenuTitle, "View"),
        ]),
        Element::new("tabs", ElementKind::Tabs, "").with_children(vec![
            Element::new("p0", ElementKind::TabEntry, "General").with_children(vec![
                Element::new("g1", ElementKind::Ordinary, "Greeting"),
            ]),
            Element::new("p1", ElementKind::TabEntry, "Network").with_children(vec![
                Element::new("n1", ElementKind::Ordinary, "Gateway"),
            ]),
        ]),
        Element::new("ok", ElementKind::DialogButton, "&OK"),
        Element::new("entry", ElementKind::Excluded, "/tmp/foo"),
    ]);
    Document {
        root: Some(root),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_accelerator_reads_every_rendering() {
        assert_eq!(effective_accelerator("&Save"), Some('s'));
        assert_eq!(effective_accelerator("Save"), None);
        assert_eq!(effective_accelerator("(&&)T(!)&abs"), Some('a'));
        assert_eq!(effective_accelerator("(!)&Edit"), Some('e'));
        assert_eq!(effective_accelerator("(&&)Go"), None);
    }

    #[test]
    fn initial_pass_is_applied_to_the_display_tree() {
        let m = initial_model(sample_doc());
        let tree = m.tree.as_ref().unwrap();
        assert_eq!(tree.find("t-view").unwrap().text, "&View");
        assert_eq!(tree.find("g1").unwrap().text, "G&reeting");
        // pristine keeps the authored text
        assert_eq!(m.pristine.as_ref().unwrap().find("t-view").unwrap().text, "View");
        assert!(m.status.ends_with("labels updated"));
    }

    #[test]
    fn lines_follow_the_active_page_only() {
        let m = initial_model(sample_doc());
        let texts: Vec<String> = m
            .lines()
            .iter()
            .flat_map(|l| l.segments.iter().map(|s| s.text.clone()))
            .collect();
        assert!(texts.contains(&"G&reeting".to_string()));
        assert!(!texts.iter().any(|t| t.contains("Gateway")));
        assert!(texts.contains(&"[/tmp/foo]".to_string()));
    }

    #[test]
    fn typing_a_tab_accelerator_switches_pages() {
        let mut m = initial_model(sample_doc());
        assert!(m.activate('N'));
        let tree = m.tree.as_ref().unwrap();
        assert_eq!(tree.find("tabs").unwrap().active, 1);
        assert_eq!(tree.find("n1").unwrap().text, "G&ateway");
        assert_eq!(m.pristine.as_ref().unwrap().find("tabs").unwrap().active, 1);
        assert_eq!(m.first_tabs(), Some(("tabs".to_string(), 1, 2)));
    }

    #[test]
    fn typing_a_menu_accelerator_opens_the_popup() {
        let mut m = initial_model(sample_doc());
        assert!(m.activate('f'));
        assert_eq!(m.popups, vec!["file".to_string()]);
        assert_eq!(m.scope(), vec!["Settings", "file"]);
        assert!(m.activate('e'));
        assert_eq!(m.popups.last().map(String::as_str), Some("export"));
        assert!(m.activate('p'));
        assert_eq!(m.status, "activated PDF");
        assert!(m.close_menu());
        assert!(m.close_menu());
        assert!(!m.close_menu());
        assert_eq!(m.scope(), vec!["Settings"]);
    }

    #[test]
    fn unknown_key_leaves_state_alone() {
        let mut m = initial_model(sample_doc());
        assert!(!m.activate('z'));
        assert!(m.popups.is_empty());
        assert_eq!(m.status, "no accelerator 'z' here");
    }

    #[test]
    fn toggling_programmers_mode_recomputes_from_authored_text() {
        let mut m = initial_model(sample_doc());
        m.toggle_programmers_mode();
        assert!(m.session.programmers_mode());
        let tree = m.tree.as_ref().unwrap();
        assert_eq!(tree.find("t-view").unwrap().text, "(!)&View");
        assert!(m.status.starts_with("programmer's mode"));
        m.toggle_programmers_mode();
        assert_eq!(m.tree.as_ref().unwrap().find("t-view").unwrap().text, "&View");
    }

    #[test]
    fn empty_document_has_nothing_to_show() {
        let m = initial_model(Document::default());
        assert!(m.lines().is_empty());
        assert_eq!(m.status, "no tree loaded");
        assert_eq!(m.scope(), vec!["mnemo"]);
    }
}
