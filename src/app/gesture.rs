//! Touch-Gesten-Interpretation: Tippen vs. horizontales Scrollen.
//!
//! Die Zustandsmaschine konsumiert pro Frame den aktuellen Kontakt-Satz
//! und gibt explizite Effekte zurück; sie mutiert selbst keinen State.
//! `Start` und `Release` sind transiente Zustände, die innerhalb eines
//! Aufrufs durchlaufen werden.

use glam::Vec2;

/// Ein aktiver Touch-Kontakt in Canvas-Koordinaten
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchContact {
    /// Kontakt-ID des Betriebssystems
    pub id: u64,
    /// Position in Canvas-Pixeln
    pub pos: Vec2,
}

/// Phase der Gesten-Erkennung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// Erster Kontakt registriert (transient)
    Start,
    /// Kontakt liegt an, Bewegungsschwelle noch nicht überschritten
    PendingScrolling,
    /// Schwelle überschritten: Bewegungen scrollen
    Scrolling,
    /// Kontakt gelöst ohne Scrollen: wird als Tippen gewertet (transient)
    Release,
    /// Keine aktive Geste
    #[default]
    End,
}

/// Effekt einer Gesten-Auswertung; der Aufrufer setzt ihn um
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEffect {
    /// Scroll-Offset um den Betrag verschieben (Vorzeichen bereits
    /// für natürliches Scrollen negiert)
    ScrollBy(f32),
    /// Tippen an der Position (letzte bekannte Kontakt-Position)
    TapAt(Vec2),
}

/// Zustandsmaschine für Ein-Finger-Gesten auf dem Graph-Canvas
#[derive(Debug)]
pub struct TouchInterpreter {
    phase: GesturePhase,
    threshold_px: f32,
    primary_id: u64,
    start_pos: Vec2,
    last_pos: Vec2,
}

impl TouchInterpreter {
    /// Erstellt einen Interpreter mit der gegebenen Bewegungsschwelle.
    pub fn new(threshold_px: f32) -> Self {
        Self {
            phase: GesturePhase::End,
            threshold_px,
            primary_id: 0,
            start_pos: Vec2::ZERO,
            last_pos: Vec2::ZERO,
        }
    }

    /// Aktuelle Phase (nach dem letzten `handle_contacts`)
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Setzt die Bewegungsschwelle (bei Optionsänderung).
    pub fn set_threshold(&mut self, threshold_px: f32) {
        self.threshold_px = threshold_px;
    }

    /// Wertet den aktuellen Kontakt-Satz aus und gibt die Effekte zurück.
    ///
    /// Wird bei jedem rohen Touch-Event erneut aufgerufen, auch wenn sich
    /// der Satz selbst nicht geändert hat.
    pub fn handle_contacts(&mut self, contacts: &[TouchContact]) -> Vec<GestureEffect> {
        let mut effects = Vec::new();

        if self.phase == GesturePhase::End {
            let Some(first) = contacts.first() else {
                return effects;
            };
            // Start ist transient: sofort weiter nach PendingScrolling
            self.phase = GesturePhase::Start;
            self.primary_id = first.id;
            self.start_pos = first.pos;
            self.last_pos = first.pos;
            self.phase = GesturePhase::PendingScrolling;
            return effects;
        }

        let primary = contacts.iter().find(|c| c.id == self.primary_id).copied();

        match self.phase {
            GesturePhase::PendingScrolling => match primary {
                Some(contact) => {
                    if (contact.pos - self.start_pos).length() > self.threshold_px {
                        self.phase = GesturePhase::Scrolling;
                        effects.push(GestureEffect::ScrollBy(
                            -(contact.pos.x - self.last_pos.x),
                        ));
                    }
                    self.last_pos = contact.pos;
                }
                None => {
                    if contacts.is_empty() {
                        // Release ist transient: Tippen melden, dann End
                        self.phase = GesturePhase::Release;
                        effects.push(GestureEffect::TapAt(self.last_pos));
                        self.phase = GesturePhase::End;
                    } else {
                        self.reanchor(contacts);
                    }
                }
            },
            GesturePhase::Scrolling => match primary {
                Some(contact) => {
                    effects.push(GestureEffect::ScrollBy(
                        -(contact.pos.x - self.last_pos.x),
                    ));
                    self.last_pos = contact.pos;
                }
                None => {
                    if contacts.is_empty() {
                        self.phase = GesturePhase::End;
                    } else {
                        self.reanchor(contacts);
                    }
                }
            },
            // Start/Release sind transient, End wurde oben behandelt
            _ => {}
        }

        effects
    }

    /// Primär-Kontakt wurde gelöst, andere liegen noch an: auf den
    /// nächsten umankern ohne einen Versatz-Sprung zu erzeugen.
    fn reanchor(&mut self, contacts: &[TouchContact]) {
        if let Some(next) = contacts.first() {
            self.primary_id = next.id;
            self.last_pos = next.pos;
        }
    }
}
