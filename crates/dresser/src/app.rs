use crate::config::{self, Config, ConfigError};
use crate::events::AppEvent;
use crate::scene::SceneSink;
use crate::ui::{self, Panel};
use wardrobe::{SelectionEngine, SlotRegistry};

pub struct AppModel {
    pub engine: SelectionEngine<SceneSink>,
    pub panel: Panel,
    pub config: Config,
}

impl AppModel {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let engine = Self::build_engine(config.registry()?, config.seed);
        let mut panel = Panel::new();
        panel.sync(engine.registry(), engine.state());
        Ok(Self {
            engine,
            panel,
            config,
        })
    }

    fn build_engine(registry: SlotRegistry, seed: Option<u64>) -> SelectionEngine<SceneSink> {
        let sink = SceneSink::new(&registry);
        match seed {
            Some(seed) => SelectionEngine::seeded(registry, sink, seed),
            None => SelectionEngine::from_entropy(registry, sink),
        }
    }

    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Change(slot, request) => {
                let change = self.engine.change(slot, request);
                if !change.applied {
                    log::info!("{} is locked by the outfit/separates rule", slot);
                }
                self.panel.apply(&change, self.engine.state());
            }
            AppEvent::RandomizeAll => {
                for change in self.engine.randomize_all() {
                    self.panel.apply(&change, self.engine.state());
                }
            }
            AppEvent::Activate => {
                if self.config.auto_randomize_on_activate {
                    self.update(AppEvent::RandomizeAll);
                }
            }
            AppEvent::Reset => {
                self.engine.reinitialize();
                self.panel.sync(self.engine.registry(), self.engine.state());
            }
            AppEvent::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    if let Err(e) = self.reload(new_config) {
                        log::error!("Failed to reload config: {}", e);
                    }
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
            AppEvent::Status | AppEvent::Quit => {}
        }
    }

    /// Swaps in a new wardrobe. Every slot starts empty again; on error the current
    /// wardrobe stays untouched.
    pub fn reload(&mut self, config: Config) -> Result<(), ConfigError> {
        let registry = config.registry()?;
        self.engine.reinitialize();
        self.engine = Self::build_engine(registry, config.seed);
        self.panel.sync(self.engine.registry(), self.engine.state());
        self.config = config;
        log::info!("Configuration reloaded");
        Ok(())
    }

    pub fn render(&self) -> String {
        ui::render(&self.panel, self.engine.mask(), self.engine.sink())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::DEFAULT_LABEL;
    use strum::IntoEnumIterator;
    use wardrobe::{Piece, Request, Slot};

    fn model(auto_randomize: bool) -> AppModel {
        let mut config = config::default_config().unwrap();
        config.seed = Some(3);
        config.auto_randomize_on_activate = auto_randomize;
        AppModel::new(config).unwrap()
    }

    fn assert_panel_matches_engine(app: &AppModel) {
        for slot in Slot::iter() {
            let expected = app.engine.current(slot).map_or(DEFAULT_LABEL, Piece::name);
            assert_eq!(app.panel.label(slot), expected, "{slot}");
        }
    }

    #[test]
    fn test_activate_without_auto_randomize_changes_nothing() {
        let mut app = model(false);
        app.update(AppEvent::Activate);
        assert_eq!(app.engine.state().active_slots().count(), 0);
        assert!(Slot::iter().all(|slot| app.panel.label(slot) == DEFAULT_LABEL));
    }

    #[test]
    fn test_activate_with_auto_randomize_leaves_outfit_alone() {
        let mut app = model(true);
        app.update(AppEvent::Activate);
        assert_eq!(app.engine.state().get(Slot::Outfit), None);
        assert_panel_matches_engine(&app);
        assert_eq!(&app.engine.sink().hidden_body_parts(), app.engine.mask());
    }

    #[test]
    fn test_outfit_disables_separate_buttons() {
        let mut app = model(false);
        app.update(AppEvent::Change(Slot::Outfit, Request::NEXT));
        assert_eq!(app.panel.label(Slot::Outfit), "Outfit_Jumpsuit");
        for slot in Slot::SEPARATES {
            assert!(!app.panel.is_enabled(slot));
        }
        assert!(app.panel.is_enabled(Slot::Outfit));

        // the engine holds the line even if a client ignores the panel
        app.update(AppEvent::Change(Slot::Top, Request::NEXT));
        assert_eq!(app.engine.state().get(Slot::Top), None);
        assert_eq!(app.panel.label(Slot::Top), DEFAULT_LABEL);

        app.update(AppEvent::Change(Slot::Outfit, Request::CLEAR));
        assert!(Slot::iter().all(|slot| app.panel.is_enabled(slot)));
    }

    #[test]
    fn test_full_separates_disable_outfit_button() {
        let mut app = model(false);
        for slot in Slot::SEPARATES {
            app.update(AppEvent::Change(slot, Request::NEXT));
        }
        assert!(!app.panel.is_enabled(Slot::Outfit));
        assert_eq!(app.panel.label(Slot::Bottom), "Bottom_Jeans");
        assert!(app.render().contains("Top_Tshirt"));
    }

    #[test]
    fn test_reset_clears_scene_and_labels() {
        let mut app = model(false);
        app.update(AppEvent::RandomizeAll);
        app.update(AppEvent::Change(Slot::Head, Request::Absolute(0)));
        app.update(AppEvent::Reset);
        assert_eq!(app.engine.sink().visible_pieces().count(), 0);
        assert!(app.engine.sink().hidden_body_parts().is_empty());
        assert_panel_matches_engine(&app);
    }

    #[test]
    fn test_failed_reload_keeps_current_wardrobe() {
        let mut app = model(false);
        app.update(AppEvent::Change(Slot::Head, Request::NEXT));

        let broken = Config {
            base_body: Vec::new(),
            ..app.config.clone()
        };
        assert!(app.reload(broken).is_err());
        assert_eq!(app.panel.label(Slot::Head), "Head_Cap");
        assert_eq!(app.engine.state().get(Slot::Head), Some(0));
    }

    #[test]
    fn test_reload_starts_from_empty_selection() {
        let mut app = model(false);
        app.update(AppEvent::Change(Slot::Shoes, Request::NEXT));
        app.reload(app.config.clone()).unwrap();
        assert_eq!(app.engine.state().active_slots().count(), 0);
        assert_eq!(app.panel.label(Slot::Shoes), DEFAULT_LABEL);
    }
}
