//! Faltet egui-Touch-Events in den Kontaktstand der Gesten-Maschine.

use crate::app::{AppIntent, TouchContact};

/// Verfolgt aktive Touch-Kontakte auf der Kurvenfläche.
///
/// Kontakte, die außerhalb der Fläche beginnen, werden ignoriert;
/// einmal erfasste Kontakte dürfen die Fläche während der Geste
/// verlassen.
#[derive(Default)]
pub(super) struct TouchTracker {
    contacts: Vec<TouchContact>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verarbeitet die Touch-Events des Frames.
    /// Gibt bei jeder Änderung des Kontaktstands einen `TouchFrame` zurück.
    pub fn collect(&mut self, ui: &egui::Ui, response: &egui::Response) -> Vec<AppIntent> {
        let rect = response.rect;

        let touch_events: Vec<(u64, egui::TouchPhase, egui::Pos2)> = ui.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Touch {
                        id, phase, pos, ..
                    } => Some((id.0, *phase, *pos)),
                    _ => None,
                })
                .collect()
        });

        let mut changed = false;
        for (id, phase, pos) in touch_events {
            let local = glam::Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y);
            match phase {
                egui::TouchPhase::Start => {
                    if rect.contains(pos) {
                        self.upsert(id, local);
                        changed = true;
                    }
                }
                egui::TouchPhase::Move => {
                    if self.update_known(id, local) {
                        changed = true;
                    }
                }
                egui::TouchPhase::End | egui::TouchPhase::Cancel => {
                    if self.remove(id) {
                        changed = true;
                    }
                }
            }
        }

        if changed {
            vec![AppIntent::TouchFrame {
                contacts: self.contacts.clone(),
            }]
        } else {
            Vec::new()
        }
    }

    fn upsert(&mut self, id: u64, pos: glam::Vec2) {
        if !self.update_known(id, pos) {
            self.contacts.push(TouchContact { id, pos });
        }
    }

    fn update_known(&mut self, id: u64, pos: glam::Vec2) -> bool {
        match self.contacts.iter_mut().find(|c| c.id == id) {
            Some(contact) => {
                contact.pos = pos;
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, id: u64) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.id != id);
        self.contacts.len() != before
    }
}
