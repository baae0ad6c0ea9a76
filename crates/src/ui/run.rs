use crate::loader::Document;
use crate::ui::model::{initial_model, Model};
use bubbletea_rs::{
    command::Cmd, event::KeyMsg, event::WindowSizeMsg, model::Model as TeaModel, window_size,
    Program,
};
use crossterm::event::{KeyCode, KeyModifiers};
use once_cell::sync::OnceCell;

// `TeaModel::init` takes no arguments, so the document travels through here.
static LAUNCH: OnceCell<Document> = OnceCell::new();

// Adapter type implementing bubbletea-rs Model trait by delegating to our Model
struct TeaAdapter {
    inner: Model,
}

impl TeaModel for TeaAdapter {
    fn init() -> (Self, Option<Cmd>) {
        let doc = LAUNCH.get().cloned().unwrap_or_default();
        let mut adapter = TeaAdapter {
            inner: initial_model(doc),
        };
        let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
        adapter.inner.update(crate::ui::Msg::WindowSize {
            width: width as usize,
            height: height as usize,
        });
        (adapter, Some(window_size()))
    }

    fn update(&mut self, msg: bubbletea_rs::event::Msg) -> Option<Cmd> {
        // Map bubbletea-rs Msg types to our ui::Msg and call update
        if let Some(km) = msg.downcast_ref::<KeyMsg>() {
            match &km.key {
                KeyCode::Esc => {
                    if self.inner.popups.is_empty() {
                        return Some(bubbletea_rs::quit());
                    }
                    self.inner.update(crate::ui::Msg::KeyEsc);
                }
                KeyCode::Tab => {
                    self.inner.update(crate::ui::Msg::KeyTab);
                }
                KeyCode::Up => {
                    self.inner.update(crate::ui::Msg::KeyUp);
                }
                KeyCode::Down => {
                    self.inner.update(crate::ui::Msg::KeyDown);
                }
                KeyCode::Char(ch) => {
                    if *ch == '\u{03}' {
                        // Ctrl-C delivered as ETX
                        return Some(bubbletea_rs::quit());
                    }
                    if km.modifiers.contains(KeyModifiers::CONTROL) {
                        match ch {
                            'c' | 'C' => return Some(bubbletea_rs::quit()),
                            'p' | 'P' => self.inner.update(crate::ui::Msg::ToggleMode),
                            'n' | 'N' => self.inner.update(crate::ui::Msg::KeyDown),
                            _ => {}
                        }
                    } else {
                        self.inner.update(crate::ui::Msg::Rune(*ch));
                    }
                }
                _ => {}
            }
            return None;
        }
        if let Some(ws) = msg.downcast_ref::<WindowSizeMsg>() {
            self.inner.update(crate::ui::Msg::WindowSize {
                width: ws.width as usize,
                height: ws.height as usize,
            });
            return None;
        }
        None
    }

    fn view(&self) -> String {
        self.inner.render_full()
    }
}

/// Run the interactive preview until the user quits. Returns the last status line.
pub async fn run(doc: Document) -> Result<String, String> {
    LAUNCH
        .set(doc)
        .map_err(|_| "interactive preview already started".to_string())?;

    let builder = Program::<TeaAdapter>::builder()
        .alt_screen(true)
        .signal_handler(true);
    let program = match builder.build() {
        Ok(p) => p,
        Err(e) => return Err(format!("failed to build program: {e:?}")),
    };
    let final_adapter = match program.run().await {
        Ok(fa) => fa,
        Err(e) => return Err(format!("program error: {e:?}")),
    };
    log::info!("preview closed: {}", final_adapter.inner.status);
    Ok(final_adapter.inner.status.clone())
}
