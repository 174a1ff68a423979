//! Undo/Redo-History über umkehrbare Edit-Commands.
//!
//! Der Undo-Stack ist ein wiederabspielbares Log: `execute` wendet einen
//! Command an und legt ihn oben auf; `undo`/`redo` schieben Einträge
//! zwischen den Stacks und rufen `revert`/`apply` auf dem Pfad auf.

use super::edit_commands::EditCommand;
use crate::core::MotionPath;
use std::time::{Duration, Instant};

/// Ein History-Eintrag: Command plus Zeitpunkt der letzten Ausführung
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    /// Der ausgeführte Command
    pub command: EditCommand,
    /// Zeitpunkt der Ausführung (bei Verschmelzung: der letzten)
    pub executed_at: Instant,
}

/// Undo/Redo-Manager mit begrenzter Tiefe und Verschmelzungsfenster
pub struct EditHistory {
    undo_stack: Vec<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Führt einen Command aus und zeichnet ihn auf.
    ///
    /// `false` wenn der Command nicht angewendet wurde (fehlendes Ziel);
    /// es wird dann auch nichts aufgezeichnet. Schnell aufeinanderfolgende
    /// Updates desselben Ziels verschmelzen innerhalb von `merge_window`
    /// zu einem Eintrag; `None` deaktiviert das Verschmelzen.
    pub fn execute(
        &mut self,
        command: EditCommand,
        path: &mut MotionPath,
        merge_window: Option<Duration>,
    ) -> bool {
        if !command.apply(path) {
            log::debug!("Command nicht anwendbar: {}", command.label());
            return false;
        }
        path.mark_edited();
        self.redo_stack.clear();

        if let (Some(window), Some(target)) = (merge_window, command.merge_target()) {
            if let Some(last) = self.undo_stack.last_mut() {
                if last.command.merge_target() == Some(target)
                    && last.executed_at.elapsed() <= window
                {
                    last.command.absorb(command);
                    last.executed_at = Instant::now();
                    return true;
                }
            }
        }

        if self.max_depth > 0 && self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(HistoryEntry {
            command,
            executed_at: Instant::now(),
        });
        true
    }

    /// Setzt die maximale Stack-Tiefe und kürzt zu tiefe Stacks vorne.
    /// `0` bedeutet unbegrenzt.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
        if max_depth == 0 {
            return;
        }
        while self.undo_stack.len() > max_depth {
            self.undo_stack.remove(0);
        }
        while self.redo_stack.len() > max_depth {
            self.redo_stack.remove(0);
        }
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Beschriftung des nächsten Undo-Schritts
    pub fn undo_label(&self) -> Option<&'static str> {
        self.undo_stack.last().map(|e| e.command.label())
    }

    /// Beschriftung des nächsten Redo-Schritts
    pub fn redo_label(&self) -> Option<&'static str> {
        self.redo_stack.last().map(|e| e.command.label())
    }

    /// Aktuelle Stack-Tiefen (Undo, Redo)
    pub fn depths(&self) -> (usize, usize) {
        (self.undo_stack.len(), self.redo_stack.len())
    }

    /// Macht den letzten Command rückgängig; gibt seine Beschriftung zurück.
    pub fn undo(&mut self, path: &mut MotionPath) -> Option<&'static str> {
        let entry = self.undo_stack.pop()?;
        if !entry.command.revert(path) {
            // Ziel fehlt: Eintrag verwerfen statt inkonsistent weiterzustapeln
            log::warn!("Undo nicht anwendbar: {}", entry.command.label());
            return None;
        }
        path.mark_edited();
        let label = entry.command.label();
        if self.max_depth > 0 && self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(entry);
        Some(label)
    }

    /// Wiederholt den zuletzt rückgängig gemachten Command.
    pub fn redo(&mut self, path: &mut MotionPath) -> Option<&'static str> {
        let entry = self.redo_stack.pop()?;
        if !entry.command.apply(path) {
            log::warn!("Redo nicht anwendbar: {}", entry.command.label());
            return None;
        }
        path.mark_edited();
        let label = entry.command.label();
        if self.max_depth > 0 && self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(entry);
        Some(label)
    }

    /// Leert beide Stacks (z.B. nach Dokumentwechsel).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
