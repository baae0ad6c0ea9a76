use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a UI element, as reported by whoever walks the live widget tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Layout or window without a label of its own.
    #[default]
    Container,
    /// Buttons, check boxes, radio buttons.
    Ordinary,
    /// A button inside a dialog's button box.
    DialogButton,
    /// A text label; only plain-text labels with a buddy field take part.
    Label,
    /// Decorative heading of a group box.
    GroupHeading,
    /// Tab widget: children are pages, page text is the tab title.
    Tabs,
    TabEntry,
    /// Children are menu titles.
    MenuBar,
    MenuTitle,
    /// Text entry, combo box, spin box: fixed keyboard affordance of its own.
    Excluded,
}

fn visible_default() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub kind: ElementKind,
    #[serde(default = "visible_default")]
    pub visible: bool,
    /// Group headings: the heading carries a check box.
    #[serde(default, skip_serializing_if = "is_false")]
    pub checkable: bool,
    /// Labels: a field is attached to this label.
    #[serde(default, skip_serializing_if = "is_false")]
    pub buddy: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub rich_text: bool,
    /// Tabs: index of the page currently shown.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub active: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
    /// Popup attached to this element (menu titles, menu buttons).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<Menu>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub id: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub separator: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submenu: Option<Menu>,
}

impl Element {
    pub fn new(id: &str, kind: ElementKind, text: &str) -> Self {
        Element {
            id: id.to_string(),
            text: text.to_string(),
            kind,
            visible: true,
            ..Default::default()
        }
    }

    pub fn with_children(mut self, children: Vec<Element>) -> Self {
        self.children = children;
        self
    }

    pub fn with_menu(mut self, menu: Menu) -> Self {
        self.menu = Some(menu);
        self
    }

    pub fn find(&self, id: &str) -> Option<&Element> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(id))
    }

    /// Menu with `id` attached anywhere below (and including) this element.
    pub fn find_menu(&self, id: &str) -> Option<&Menu> {
        if let Some(m) = self.menu.as_ref().and_then(|m| m.find(id)) {
            return Some(m);
        }
        self.children.iter().find_map(|c| c.find_menu(id))
    }

    pub fn find_menu_mut(&mut self, id: &str) -> Option<&mut Menu> {
        if let Some(m) = self.menu.as_mut() {
            if m.contains(id) {
                return m.find_mut(id);
            }
        }
        self.children.iter_mut().find_map(|c| c.find_menu_mut(id))
    }
}

impl Menu {
    pub fn new(id: &str, items: Vec<MenuItem>) -> Self {
        Menu {
            id: id.to_string(),
            items,
        }
    }

    fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn find(&self, id: &str) -> Option<&Menu> {
        if self.id == id {
            return Some(self);
        }
        self.items
            .iter()
            .filter_map(|it| it.submenu.as_ref())
            .find_map(|m| m.find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Menu> {
        if self.id == id {
            return Some(self);
        }
        self.items
            .iter_mut()
            .filter_map(|it| it.submenu.as_mut())
            .find_map(|m| m.find_mut(id))
    }
}

impl MenuItem {
    pub fn new(text: &str) -> Self {
        MenuItem {
            text: text.to_string(),
            ..Default::default()
        }
    }

    pub fn separator() -> Self {
        MenuItem {
            separator: true,
            ..Default::default()
        }
    }

    pub fn with_submenu(mut self, menu: Menu) -> Self {
        self.submenu = Some(menu);
        self
    }
}

/// Where a rendered label has to be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Element(String),
    /// Tab title `index` of the tab widget `owner`.
    Tab { owner: String, index: usize },
    /// Item `index` of menu `menu`, separators counted.
    MenuItem { menu: String, index: usize },
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Element(id) => write!(f, "{id}"),
            Target::Tab { owner, index } => write!(f, "{owner}#tab{index}"),
            Target::MenuItem { menu, index } => write!(f, "{menu}#{index}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteBack {
    pub target: Target,
    pub text: String,
}

/// Push write-backs onto a tree. Targets that no longer exist are skipped.
/// Returns how many were applied.
pub fn apply(root: &mut Element, writes: &[WriteBack]) -> usize {
    let mut applied = 0usize;
    for w in writes {
        let slot: Option<&mut String> = match &w.target {
            Target::Element(id) => root.find_mut(id).map(|e| &mut e.text),
            Target::Tab { owner, index } => root
                .find_mut(owner)
                .and_then(|e| e.children.get_mut(*index))
                .map(|page| &mut page.text),
            Target::MenuItem { menu, index } => root
                .find_menu_mut(menu)
                .and_then(|m| m.items.get_mut(*index))
                .map(|it| &mut it.text),
        };
        match slot {
            Some(text) => {
                *text = w.text.clone();
                applied += 1;
            }
            None => log::debug!("write-back target {} not found", w.target),
        }
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new("win", ElementKind::Container, "").with_children(vec![
            Element::new("ok", ElementKind::DialogButton, "OK"),
            Element::new("tabs", ElementKind::Tabs, "").with_children(vec![
                Element::new("general", ElementKind::TabEntry, "General"),
                Element::new("advanced", ElementKind::TabEntry, "Advanced"),
            ]),
            Element::new("menu-btn", ElementKind::Ordinary, "More").with_menu(Menu::new(
                "more",
                vec![
                    MenuItem::new("First"),
                    MenuItem::separator(),
                    MenuItem::new("Nested").with_submenu(Menu::new(
                        "nested",
                        vec![MenuItem::new("Deep")],
                    )),
                ],
            )),
        ])
    }

    #[test]
    fn deserializes_with_defaults() {
        let json = r#"{
            "id": "root",
            "children": [
                { "id": "b", "kind": "ordinary", "text": "&Apply" },
                { "id": "g", "kind": "group_heading", "text": "Options", "checkable": true },
                { "id": "e", "kind": "excluded", "visible": false }
            ]
        }"#;
        let root: Element = serde_json::from_str(json).unwrap();
        assert_eq!(root.kind, ElementKind::Container);
        assert!(root.visible);
        assert_eq!(root.children[0].kind, ElementKind::Ordinary);
        assert!(root.children[1].checkable);
        assert!(!root.children[2].visible);
        assert_eq!(root.children[2].text, "");
    }

    #[test]
    fn finds_nested_menus() {
        let t = sample();
        assert_eq!(t.find("advanced").map(|e| e.text.as_str()), Some("Advanced"));
        assert!(t.find("nope").is_none());
        assert_eq!(t.find_menu("nested").map(|m| m.items.len()), Some(1));
        assert!(t.find_menu("missing").is_none());
    }

    #[test]
    fn apply_writes_every_target_kind() {
        let mut t = sample();
        let writes = vec![
            WriteBack {
                target: Target::Element("ok".into()),
                text: "&OK".into(),
            },
            WriteBack {
                target: Target::Tab {
                    owner: "tabs".into(),
                    index: 1,
                },
                text: "&Advanced".into(),
            },
            WriteBack {
                target: Target::MenuItem {
                    menu: "nested".into(),
                    index: 0,
                },
                text: "&Deep".into(),
            },
            WriteBack {
                target: Target::MenuItem {
                    menu: "more".into(),
                    index: 9,
                },
                text: "ignored".into(),
            },
        ];
        assert_eq!(apply(&mut t, &writes), 3);
        assert_eq!(t.find("ok").unwrap().text, "&OK");
        assert_eq!(t.find("advanced").unwrap().text, "&Advanced");
        assert_eq!(t.find_menu("nested").unwrap().items[0].text, "&Deep");
    }

    #[test]
    fn target_display() {
        assert_eq!(Target::Element("ok".into()).to_string(), "ok");
        assert_eq!(
            Target::Tab {
                owner: "tabs".into(),
                index: 2
            }
            .to_string(),
            "tabs#tab2"
        );
        assert_eq!(
            Target::MenuItem {
                menu: "file".into(),
                index: 3
            }
            .to_string(),
            "file#3"
        );
    }
}
