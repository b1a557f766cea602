use crate::core::Schematic;
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1),
/// der eigentliche Klon findet erst beim nächsten `Arc::make_mut()` in einem
/// Use-Case statt. Ein Snapshot wird nie mehr verändert.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Modell zum Zeitpunkt des Snapshots
    pub schematic: Arc<Schematic>,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot des aktuellen Modells.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            schematic: state.schematic.clone(),
        }
    }

    /// Stellt den Snapshot wieder her (O(1) Arc-Zuweisung).
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.schematic = self.schematic;
    }
}

/// Undo/Redo-Manager: lineare Snapshot-Liste mit aktuellem Index.
///
/// `snapshots[index]` entspricht immer dem Live-Modell. Ein neuer Eintrag
/// verwirft den Redo-Rest hinter dem Index. Ohne Tiefenlimit bleibt jeder
/// Schritt bis zum Ausgangszustand rückgängig machbar.
#[derive(Debug, Clone)]
pub struct EditHistory {
    snapshots: Vec<Snapshot>,
    index: usize,
    /// `None` = unbegrenzt
    max_depth: Option<usize>,
}

impl EditHistory {
    /// Erstellt einen History-Manager mit Ausgangszustand und maximaler Tiefe.
    ///
    /// `max_depth == 0` bedeutet unbegrenzt.
    pub fn new_with_capacity(initial: Snapshot, max_depth: usize) -> Self {
        let max_depth = depth_limit(max_depth);
        let mut snapshots = Vec::with_capacity(max_depth.unwrap_or(64).min(64) + 1);
        snapshots.push(initial);
        Self {
            snapshots,
            index: 0,
            max_depth,
        }
    }

    /// Verwirft alle Einträge und beginnt mit neuem Ausgangszustand.
    pub fn reset(&mut self, initial: Snapshot) {
        self.snapshots.clear();
        self.snapshots.push(initial);
        self.index = 0;
    }

    /// Setzt die maximale Anzahl Undo-Schritte (0 = unbegrenzt); älteste
    /// Einträge fallen weg.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = depth_limit(max_depth);
        self.trim_front();
    }

    /// Hängt den Zustand nach einer Mutation an (Redo-Rest wird verworfen).
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(snap);
        self.index = self.snapshots.len() - 1;
        self.trim_front();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    /// Geht einen Schritt zurück und liefert den wiederherzustellenden Snapshot.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        self.snapshots.get(self.index).cloned()
    }

    /// Geht einen Schritt vor und liefert den wiederherzustellenden Snapshot.
    pub fn redo(&mut self) -> Option<Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        self.snapshots.get(self.index).cloned()
    }

    /// Anzahl gespeicherter Snapshots (inklusive Ausgangszustand).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Immer `false`: der Ausgangszustand ist stets vorhanden.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Aktueller Index.
    pub fn index(&self) -> usize {
        self.index
    }

    fn trim_front(&mut self) {
        let Some(max_depth) = self.max_depth else {
            return;
        };
        // max_depth Undo-Schritte = max_depth + 1 Zustände
        let limit = max_depth + 1;
        if self.snapshots.len() > limit {
            let excess = self.snapshots.len() - limit;
            self.snapshots.drain(..excess);
            self.index = self.index.saturating_sub(excess);
        }
    }
}

fn depth_limit(max_depth: usize) -> Option<usize> {
    (max_depth > 0).then_some(max_depth)
}
