//! DOM presenter
//!
//! Entities are absolutely positioned elements inside `#game-area`; positions
//! are written as percentage `left`/`top`.

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use crate::audio::AudioManager;
use crate::parse_percent;
use crate::presenter::{EntityId, Presenter, Tone};
use crate::settings::Settings;
use crate::sim::Viewport;

pub struct DomPresenter {
    area: Element,
    cat: HtmlElement,
    home: HtmlElement,
    score: Element,
    lives: Element,
    game_over: Element,
    final_score: Element,
    foods: Vec<HtmlElement>,
    obstacles: Vec<HtmlElement>,
    audio: AudioManager,
    home_pulse: bool,
    home_float_px: f32,
}

fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{id}")))
}

fn html_element(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    element(document, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("#{id} is not an HTML element")))
}

fn html_elements(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn set_position(el: &HtmlElement, pos: Vec2) {
    let style = el.style();
    let _ = style.set_property("left", &format!("{}%", pos.x));
    let _ = style.set_property("top", &format!("{}%", pos.y));
}

impl DomPresenter {
    pub fn bind(document: &Document, settings: &Settings) -> Result<Self, JsValue> {
        let foods = html_elements(document, ".food");
        let obstacles = html_elements(document, ".obstacle");
        if obstacles.len() != crate::consts::OBSTACLE_STARTS.len() {
            log::warn!(
                "Expected {} obstacles in the page, found {}",
                crate::consts::OBSTACLE_STARTS.len(),
                obstacles.len()
            );
        }
        log::info!("Bound {} food items", foods.len());

        Ok(Self {
            area: element(document, "game-area")?,
            cat: html_element(document, "cat")?,
            home: html_element(document, "home")?,
            score: element(document, "score")?,
            lives: element(document, "lives")?,
            game_over: element(document, "game-over")?,
            final_score: element(document, "final-score")?,
            foods,
            obstacles,
            audio: AudioManager::new(settings.effective_volume()),
            home_pulse: false,
            home_float_px: 0.0,
        })
    }

    /// Food positions declared inline in the page; unparseable entries are `None`
    pub fn food_layout(&self) -> Vec<Option<Vec2>> {
        self.foods
            .iter()
            .map(|el| {
                let style = el.style();
                let x = style.get_property_value("left").ok()?;
                let y = style.get_property_value("top").ok()?;
                Some(Vec2::new(parse_percent(&x)?, parse_percent(&y)?))
            })
            .collect()
    }

    /// Resume audio after the first user gesture
    pub fn resume_audio(&self) {
        self.audio.resume();
    }

    fn element_for(&self, entity: EntityId) -> Option<&HtmlElement> {
        match entity {
            EntityId::Player => Some(&self.cat),
            EntityId::Home => Some(&self.home),
            EntityId::Food(i) => self.foods.get(i),
            EntityId::Obstacle(i) => self.obstacles.get(i),
        }
    }

    fn apply_home_transform(&self) {
        let scale = if self.home_pulse { 1.2 } else { 1.0 };
        let _ = self.home.style().set_property(
            "transform",
            &format!("translate(0, {}px) scale({scale})", self.home_float_px),
        );
    }
}

impl Presenter for DomPresenter {
    fn viewport(&self) -> Viewport {
        let (w, h) = (self.area.client_width(), self.area.client_height());
        if w <= 0 || h <= 0 {
            return Viewport::default();
        }
        Viewport::new(w as f32, h as f32)
    }

    fn render_player(&mut self, pos: Vec2) {
        set_position(&self.cat, pos);
    }

    fn render_score(&mut self, score: u64) {
        self.score.set_text_content(Some(&score.to_string()));
    }

    fn render_lives(&mut self, lives: u8) {
        self.lives.set_text_content(Some(&lives.to_string()));
    }

    fn play_tone(&mut self, tone: Tone) {
        self.audio.play(tone);
    }

    fn show_game_over(&mut self, final_score: u64) {
        self.final_score
            .set_text_content(Some(&final_score.to_string()));
        let _ = self.game_over.class_list().remove_1("hidden");
    }

    fn hide_game_over(&mut self) {
        let _ = self.game_over.class_list().add_1("hidden");
    }

    fn relocate(&mut self, entity: EntityId, pos: Vec2) {
        match self.element_for(entity) {
            Some(el) => set_position(el, pos),
            None => log::warn!("No element for {entity:?}"),
        }
    }

    fn set_visible(&mut self, entity: EntityId, visible: bool) {
        let Some(el) = self.element_for(entity) else {
            return;
        };
        if let EntityId::Food(_) = entity {
            let classes = el.class_list();
            let _ = if visible {
                classes.remove_1("collected")
            } else {
                classes.add_1("collected")
            };
        }
        let _ = el
            .style()
            .set_property("opacity", if visible { "1" } else { "0" });
    }

    fn set_home_pulse(&mut self, on: bool) {
        self.home_pulse = on;
        self.apply_home_transform();
    }

    fn set_hit_flash(&mut self, on: bool) {
        let style = self.cat.style();
        if on {
            let _ = style.set_property("transition", "all 0.5s");
            let _ = style.set_property("background-color", "red");
        } else {
            let _ = style.remove_property("background-color");
            let _ = style.set_property("transition", "all 0.2s ease");
        }
    }

    fn float_home(&mut self, offset_px: f32) {
        self.home_float_px = offset_px;
        self.apply_home_transform();
    }
}
