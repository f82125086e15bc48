//! Driver and device questions built on the accessors

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use super::{OptionStyle, XorgConfig};
use crate::base::SectionType;
use crate::base::constants::DRIVER;
use crate::hir::references_of;
use crate::parser::Result;

impl XorgConfig {
    /// First `Driver` value of a section
    pub fn get_driver(&self, section: SectionType, position: usize) -> Result<String> {
        Ok(self.get_value(section, DRIVER, position)?.first().to_string())
    }

    /// Set the `Driver` line of a section
    pub fn set_driver(&mut self, section: SectionType, driver: &str, position: usize) -> Result<usize> {
        self.add_option(section, DRIVER, driver, OptionStyle::Keyword, Some(position))
    }

    fn device_uses(&self, position: usize, driver: &str) -> bool {
        self.get_driver(SectionType::Device, position)
            .is_ok_and(|d| d.eq_ignore_ascii_case(driver))
    }

    /// Whether any Device section (or any of `positions`) uses `driver`
    pub fn section_has_driver(&self, driver: &str, positions: Option<&[usize]>) -> bool {
        match positions {
            Some(positions) => positions.iter().any(|&p| self.device_uses(p, driver)),
            None => (0..self.model.count(SectionType::Device)).any(|p| self.device_uses(p, driver)),
        }
    }

    /// Device positions a Screen references
    fn screen_devices(&self, screen: usize) -> Vec<usize> {
        let references = references_of(
            &self.model,
            &self.registry,
            SectionType::Screen,
            screen,
            Some(&[SectionType::Device]),
        );
        references
            .get(&SectionType::Device)
            .into_iter()
            .flatten()
            .filter_map(|id| self.registry.position_of(SectionType::Device, id))
            .collect()
    }

    /// Device positions reached from a ServerLayout through its Screens
    pub fn get_devices_in_server_layout(&self, position: usize) -> Result<Vec<usize>> {
        self.section_lines(SectionType::ServerLayout, position)?;
        let screens = references_of(
            &self.model,
            &self.registry,
            SectionType::ServerLayout,
            position,
            Some(&[SectionType::Screen]),
        );
        let mut devices = IndexSet::new();
        for id in screens.get(&SectionType::Screen).into_iter().flatten() {
            if let Some(screen) = self.registry.position_of(SectionType::Screen, id) {
                devices.extend(self.screen_devices(screen));
            }
        }
        Ok(devices.into_iter().collect())
    }

    /// Device positions the server would use.
    ///
    /// Follows the DefaultServerLayout, else the first ServerLayout, else
    /// the first Screen; with none of those every Device is in use.
    pub fn get_devices_in_use(&self) -> Vec<usize> {
        let layout = self
            .get_default_server_layout()
            .ok()
            .flatten()
            .and_then(|id| self.registry.position_of(SectionType::ServerLayout, &id))
            .or_else(|| (self.model.count(SectionType::ServerLayout) > 0).then_some(0));

        let devices = match layout {
            Some(layout) => self.get_devices_in_server_layout(layout).unwrap_or_default(),
            None if self.model.count(SectionType::Screen) > 0 => self.screen_devices(0),
            None => (0..self.model.count(SectionType::Device)).collect(),
        };
        debug!(?layout, devices = devices.len(), "devices in use");
        devices
    }

    /// Whether a Device in use runs `driver`
    pub fn is_driver_enabled(&self, driver: &str) -> bool {
        self.get_devices_in_use().into_iter().any(|p| self.device_uses(p, driver))
    }

    /// For each referenced Device position, the Screen positions using it
    pub fn get_screen_device_relationships(&self) -> IndexMap<usize, Vec<usize>> {
        let mut relationships: IndexMap<usize, Vec<usize>> = IndexMap::new();
        for screen in 0..self.model.count(SectionType::Screen) {
            for device in self.screen_devices(screen) {
                relationships.entry(device).or_default().push(screen);
            }
        }
        relationships
    }

    /// Create a stub section for every broken reference; returns how many
    /// were created. Pair with [`crate::ParseOptions::lenient`].
    pub fn fix_broken_references(&mut self) -> Result<usize> {
        let broken = self.get_broken_references();
        let mut made = 0;
        for (target, identifiers) in broken {
            for identifier in identifiers {
                self.make_section(target, Some(&identifier))?;
                made += 1;
            }
        }
        debug!(made, "fixed broken references");
        Ok(made)
    }
}
