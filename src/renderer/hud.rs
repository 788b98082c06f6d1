//! DOM status line and overlays

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::sim::{GamePhase, GameState};

/// Handles to the HUD elements. Missing elements are skipped.
pub struct Hud {
    score_board: Option<HtmlElement>,
    menu_overlay: Option<HtmlElement>,
    game_over_screen: Option<HtmlElement>,
    final_score: Option<HtmlElement>,
    last_phase: Option<GamePhase>,
}

fn html_element(document: &Document, id: &str) -> Option<HtmlElement> {
    let element = document.get_element_by_id(id);
    if element.is_none() {
        log::warn!("HUD element #{} not found", id);
    }
    element.and_then(|e| e.dyn_into::<HtmlElement>().ok())
}

fn set_visible(element: &Option<HtmlElement>, visible: bool) {
    if let Some(el) = element {
        let display = if visible { "flex" } else { "none" };
        if let Err(e) = el.style().set_property("display", display) {
            log::warn!("Cannot toggle overlay: {:?}", e);
        }
    }
}

impl Hud {
    pub fn new(document: &Document) -> Self {
        Self {
            score_board: html_element(document, "scoreBoard"),
            menu_overlay: html_element(document, "menuOverlay"),
            game_over_screen: html_element(document, "gameOverScreen"),
            final_score: html_element(document, "finalScore"),
            last_phase: None,
        }
    }

    /// Show the start menu (called once assets are ready)
    pub fn show_menu(&mut self) {
        set_visible(&self.menu_overlay, true);
        set_visible(&self.game_over_screen, false);
        self.last_phase = Some(GamePhase::Menu);
    }

    /// Sync the DOM with the state. Overlays only change on phase transitions.
    pub fn update(&mut self, state: &GameState) {
        let view = state.hud_view();
        if let (Some(el), Some(status)) = (&self.score_board, &view.status) {
            el.set_text_content(Some(status));
        }

        if self.last_phase == Some(state.phase) {
            return;
        }
        self.last_phase = Some(state.phase);

        if let (Some(el), Some(score)) = (&self.final_score, view.final_score) {
            el.set_text_content(Some(&score.to_string()));
        }
        set_visible(&self.menu_overlay, view.menu_visible);
        set_visible(&self.game_over_screen, view.game_over_visible);
    }
}
