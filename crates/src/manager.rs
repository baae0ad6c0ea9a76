//! Pass driver: walks an element tree, groups sibling labels, assigns
//! accelerators and produces the texts to write back.

use crate::acekey::{find_accelerators, UsedSet};
use crate::config::{Settings, Weights};
use crate::label::LabeledString;
use crate::report::Report;
use crate::standard::{StandardActionTable, StandardNames};
use crate::tree::{Element, ElementKind, Menu, Target, WriteBack};
use std::collections::{HashMap, HashSet};

/// One label competing in a group, with where its result goes.
struct Slot {
    target: Target,
    label: LabeledString,
    /// Non-checkable group headings take part but never show an accelerator.
    renders: bool,
}

/// Last computed state of a popup menu.
#[derive(Debug, Clone, Default)]
struct PopupState {
    count: usize,
    entries: Vec<LabeledString>,
}

pub struct Session {
    weights: Weights,
    names: Box<dyn StandardNames>,
    programmers_mode: bool,
    ignored: HashSet<String>,
    report: Report,
    popups: HashMap<String, PopupState>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Session {
            weights: Weights::default(),
            names: Box::new(StandardActionTable),
            programmers_mode: false,
            ignored: HashSet::new(),
            report: Report::new(),
            popups: HashMap::new(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut s = Self::new();
        s.weights = settings.weights;
        s.programmers_mode = settings.programmers_mode;
        for id in &settings.ignore {
            s.ignore(id);
        }
        s
    }

    /// Replace the standard-name oracle.
    pub fn with_standard_names(mut self, names: Box<dyn StandardNames>) -> Self {
        self.names = names;
        self
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn programmers_mode(&self) -> bool {
        self.programmers_mode
    }

    pub fn set_programmers_mode(&mut self, on: bool) {
        if self.programmers_mode != on {
            // cached popups were rendered in the other mode
            self.popups.clear();
        }
        self.programmers_mode = on;
    }

    /// Exclude an element (and its subtree) from every later pass.
    pub fn ignore(&mut self, id: &str) {
        self.ignored.insert(id.to_string());
    }

    pub fn is_ignored(&self, id: &str) -> bool {
        self.ignored.contains(id)
    }

    /// Diagnostics gathered since the last top-level [`Session::manage`].
    pub fn report(&self) -> &Report {
        &self.report
    }

    fn label(&self, text: &str, weight: i32) -> LabeledString {
        LabeledString::build(text, Some(weight), &self.weights, self.names.as_ref())
    }

    /// Full pass over `root`: every visible container gets its own group,
    /// every reachable popup gets an independent pass. Returns the texts to
    /// write back, in traversal order.
    pub fn manage(&mut self, root: Option<&Element>) -> Vec<WriteBack> {
        let Some(root) = root else {
            log::warn!("accelerator pass requested without a root element");
            return Vec::new();
        };
        self.report.clear();
        let mut out = Vec::new();
        if !root.visible || self.is_ignored(&root.id) || root.kind == ElementKind::Excluded {
            log::info!("root '{}' is hidden or excluded, nothing to do", root.id);
            return out;
        }
        let mut groups = 0usize;
        self.calculate(root, UsedSet::new(), &mut out, &mut groups);
        log::info!(
            "accelerator pass over '{}': {} groups, {} write-backs",
            root.id,
            groups,
            out.len()
        );
        out
    }

    fn eligible<'a>(&self, container: &'a Element) -> Vec<&'a Element> {
        container
            .children
            .iter()
            .filter(|c| c.visible && c.kind != ElementKind::Excluded && !self.is_ignored(&c.id))
            .collect()
    }

    fn calculate(
        &mut self,
        container: &Element,
        mut used: UsedSet,
        out: &mut Vec<WriteBack>,
        groups: &mut usize,
    ) {
        let children = self.eligible(container);
        let slots = self.collect(&children);
        if !slots.is_empty() {
            *groups += 1;
            let (targets, mut labels): (Vec<(Target, bool)>, Vec<LabeledString>) = slots
                .into_iter()
                .map(|s| ((s.target, s.renders), s.label))
                .unzip();
            find_accelerators(&mut labels, &mut used);
            for ((target, renders), label) in targets.into_iter().zip(labels.iter()) {
                log::trace!("{}: {}", target, label.dump());
                if !renders {
                    continue;
                }
                if let Some(text) = self.report.check_change(label, self.programmers_mode) {
                    out.push(WriteBack { target, text });
                }
            }
        }

        for child in &children {
            if let Some(menu) = &child.menu {
                self.manage_menu_tree(menu, out);
            }
            match child.kind {
                ElementKind::MenuBar => {
                    let menus: Vec<&Menu> = child
                        .children
                        .iter()
                        .filter(|t| t.visible && !self.is_ignored(&t.id))
                        .filter_map(|t| t.menu.as_ref())
                        .collect();
                    for menu in menus {
                        self.manage_menu_tree(menu, out);
                    }
                }
                ElementKind::Tabs => {
                    if let Some(page) = child.children.get(child.active) {
                        if page.visible && !self.is_ignored(&page.id) {
                            self.calculate(page, used.clone(), out, groups);
                        }
                    }
                }
                _ => {
                    if !child.children.is_empty() {
                        self.calculate(child, used.clone(), out, groups);
                    }
                }
            }
        }
    }

    fn collect(&self, children: &[&Element]) -> Vec<Slot> {
        let w = self.weights;
        let mut slots = Vec::new();
        for child in children {
            let weight = match child.kind {
                ElementKind::Container | ElementKind::Excluded => continue,
                ElementKind::Tabs => {
                    for (index, page) in child.children.iter().enumerate() {
                        if page.text.is_empty() || self.is_ignored(&page.id) {
                            continue;
                        }
                        slots.push(Slot {
                            target: Target::Tab {
                                owner: child.id.clone(),
                                index,
                            },
                            label: self.label(&page.text, w.default_weight),
                            renders: true,
                        });
                    }
                    continue;
                }
                ElementKind::MenuBar => {
                    for title in child.children.iter() {
                        if !title.visible || title.text.is_empty() || self.is_ignored(&title.id) {
                            continue;
                        }
                        slots.push(Slot {
                            target: Target::Element(title.id.clone()),
                            label: self.label(&title.text, w.menu_title),
                            renders: true,
                        });
                    }
                    continue;
                }
                ElementKind::Label if !child.buddy || child.rich_text => continue,
                ElementKind::Ordinary | ElementKind::Label => w.action_element,
                ElementKind::DialogButton => w.action_element.saturating_add(w.dialog_button),
                ElementKind::GroupHeading if child.checkable => w.checkable_group_box,
                ElementKind::GroupHeading => w.group_box,
                ElementKind::MenuTitle => w.menu_title,
                ElementKind::TabEntry => w.default_weight,
            };
            if child.text.is_empty() {
                continue;
            }
            slots.push(Slot {
                target: Target::Element(child.id.clone()),
                label: self.label(&child.text, weight),
                renders: child.kind != ElementKind::GroupHeading || child.checkable,
            });
        }
        slots
    }

    fn manage_menu_tree(&mut self, menu: &Menu, out: &mut Vec<WriteBack>) {
        out.extend(self.about_to_show(menu));
        for item in &menu.items {
            if let Some(sub) = &item.submenu {
                self.manage_menu_tree(sub, out);
            }
        }
    }

    fn menu_entries(&self, menu: &Menu) -> Vec<(usize, LabeledString)> {
        let w = self.weights;
        menu.items
            .iter()
            .enumerate()
            .filter(|(_, it)| !it.separator)
            .map(|(i, it)| {
                // entries reachable through a global shortcut go last
                let weight = if it.text.contains('\t') {
                    w.menu_entry_with_shortcut
                } else {
                    w.menu_entry
                };
                (i, self.label(&it.text, weight))
            })
            .collect()
    }

    /// Re-evaluate a popup right before it is shown.
    ///
    /// Skipped when the item count and every entry are the same as after the
    /// previous evaluation. Each popup has its own used set; submenus are
    /// evaluated when they are shown themselves.
    pub fn about_to_show(&mut self, menu: &Menu) -> Vec<WriteBack> {
        let entries = self.menu_entries(menu);
        if let Some(state) = self.popups.get(&menu.id) {
            let unchanged = state.count == menu.items.len()
                && state.entries.len() == entries.len()
                && state.entries.iter().zip(entries.iter()).all(|(a, (_, b))| a == b);
            if unchanged {
                log::debug!("popup '{}' unchanged, keeping accelerators", menu.id);
                return Vec::new();
            }
        }

        let (indices, mut labels): (Vec<usize>, Vec<LabeledString>) = entries.into_iter().unzip();
        let mut used = UsedSet::new();
        find_accelerators(&mut labels, &mut used);

        let mut out = Vec::new();
        let mut shown = Vec::with_capacity(labels.len());
        for ((index, label), item) in indices
            .into_iter()
            .zip(labels.iter())
            .zip(menu.items.iter().filter(|it| !it.separator))
        {
            log::trace!("{}#{}: {}", menu.id, index, label.dump());
            let text = match self.report.check_change(label, self.programmers_mode) {
                Some(text) => {
                    out.push(WriteBack {
                        target: Target::MenuItem {
                            menu: menu.id.clone(),
                            index,
                        },
                        text: text.clone(),
                    });
                    text
                }
                None => item.text.clone(),
            };
            // remember what the popup looks like once the caller wrote back
            let weight = if text.contains('\t') {
                self.weights.menu_entry_with_shortcut
            } else {
                self.weights.menu_entry
            };
            shown.push(self.label(&text, weight));
        }
        self.popups.insert(
            menu.id.clone(),
            PopupState {
                count: menu.items.len(),
                entries: shown,
            },
        );
        out
    }
}
