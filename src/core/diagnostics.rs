//! Konnektivitäts-Diagnosen: feste Regelreihenfolge, vollständige Neuberechnung.
//!
//! Diagnosen sind Hinweise für die UI, keine Fehler: keine Mutation wird
//! wegen einer Diagnose blockiert.

use super::library::ComponentLibrary;
use super::pin::{PinRef, PinRole};
use super::schematic::{EntityRef, Schematic};

/// Mindestanzahl Bauteile für den Komplexitäts-Hinweis.
pub const COMPLEXITY_MIN_COMPONENTS: usize = 5;
/// Mindestanzahl Leitungen für den Komplexitäts-Hinweis.
pub const COMPLEXITY_MIN_WIRES: usize = 8;

/// Schweregrad einer Diagnose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Fehler
    Error,
    /// Warnung
    Warning,
    /// Vorschlag
    Suggestion,
}

impl Severity {
    /// Kurzname für Anzeige und Logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Suggestion => "suggestion",
        }
    }
}

/// Erzeugende Regel einer Diagnose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Unbeschalteter Eingang
    FloatingInput,
    /// Leitung verbindet einen Pin mit sich selbst
    SelfShort,
    /// Leitung verbindet zwei Ausgänge
    OutputConflict,
    /// Schaltung groß genug für eine Teilschaltung
    Complexity,
}

/// Identifikation der betroffenen Entitäten
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticRefs {
    /// Betroffenes Bauteil
    pub component_id: Option<u64>,
    /// Betroffener Pin (zusammen mit `component_id`)
    pub pin_id: Option<String>,
    /// Betroffene Leitung
    pub wire_id: Option<u64>,
}

/// Eine Diagnose
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Schweregrad
    pub severity: Severity,
    /// Erzeugende Regel
    pub kind: DiagnosticKind,
    /// Nutzerlesbare Meldung
    pub message: String,
    /// Betroffene Entitäten
    pub refs: DiagnosticRefs,
}

impl Diagnostic {
    /// Primär hervorzuhebende Entität: Leitung vor Bauteil.
    pub fn entity(&self) -> Option<EntityRef> {
        self.refs
            .wire_id
            .map(EntityRef::Wire)
            .or(self.refs.component_id.map(EntityRef::Component))
    }

    /// Betroffener Pin, falls die Diagnose einen nennt.
    pub fn pin(&self) -> Option<PinRef> {
        match (self.refs.component_id, self.refs.pin_id.as_ref()) {
            (Some(component_id), Some(pin_id)) => Some(PinRef::new(component_id, pin_id.clone())),
            _ => None,
        }
    }
}

/// Eine Diagnose-Regel
pub trait DiagnosticRule {
    /// Stabiler Bezeichner der Regel.
    fn id(&self) -> &'static str;
    /// Schweregrad der erzeugten Diagnosen.
    fn severity(&self) -> Severity;
    /// Prüft das Modell und hängt Diagnosen an `out` an.
    fn check(&self, schematic: &Schematic, library: &ComponentLibrary, out: &mut Vec<Diagnostic>);
}

/// Unbeschaltete Eingänge.
pub struct FloatingInputRule;

impl DiagnosticRule for FloatingInputRule {
    fn id(&self) -> &'static str {
        "floating_input"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, schematic: &Schematic, library: &ComponentLibrary, out: &mut Vec<Diagnostic>) {
        for component in schematic.components() {
            let Some(component_type) = library.get(&component.type_name) else {
                continue;
            };
            for template in component_type
                .pins
                .iter()
                .filter(|t| t.role == PinRole::Input)
            {
                let pin = PinRef::new(component.id, template.id.clone());
                if schematic.wires().any(|w| w.touches_pin(&pin)) {
                    continue;
                }
                out.push(Diagnostic {
                    severity: self.severity(),
                    kind: DiagnosticKind::FloatingInput,
                    message: format!(
                        "Floating input on {} ({})",
                        component_type.label,
                        template.display_name()
                    ),
                    refs: DiagnosticRefs {
                        component_id: Some(component.id),
                        pin_id: Some(template.id.clone()),
                        wire_id: None,
                    },
                });
            }
        }
    }
}

/// Leitungen mit identischem Start- und End-Pin.
pub struct SelfShortRule;

impl DiagnosticRule for SelfShortRule {
    fn id(&self) -> &'static str {
        "self_short"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, schematic: &Schematic, library: &ComponentLibrary, out: &mut Vec<Diagnostic>) {
        for wire in schematic.wires().filter(|w| w.is_self_short()) {
            let Some(pin) = wire.start_ref.as_ref() else {
                continue;
            };
            let type_label = schematic
                .component(pin.component_id)
                .and_then(|c| library.get(&c.type_name))
                .map_or("component", |t| t.label.as_str());
            out.push(Diagnostic {
                severity: self.severity(),
                kind: DiagnosticKind::SelfShort,
                message: format!("Short circuit detected on {type_label} (pin {})", pin.pin_id),
                refs: DiagnosticRefs {
                    component_id: Some(pin.component_id),
                    pin_id: Some(pin.pin_id.clone()),
                    wire_id: Some(wire.id),
                },
            });
        }
    }
}

/// Leitungen zwischen zwei Ausgängen.
pub struct OutputConflictRule;

impl DiagnosticRule for OutputConflictRule {
    fn id(&self) -> &'static str {
        "output_conflict"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, schematic: &Schematic, library: &ComponentLibrary, out: &mut Vec<Diagnostic>) {
        for wire in schematic.wires() {
            let (Some(start), Some(end)) = (wire.start_ref.as_ref(), wire.end_ref.as_ref()) else {
                continue;
            };
            let both_outputs = schematic.pin_role(start, library) == Some(PinRole::Output)
                && schematic.pin_role(end, library) == Some(PinRole::Output);
            if !both_outputs {
                continue;
            }
            let describe = |pin: &PinRef| {
                schematic
                    .component(pin.component_id)
                    .map(|c| format!("{}.{}", c.type_name, pin.pin_id))
                    .unwrap_or_else(|| pin.pin_id.clone())
            };
            out.push(Diagnostic {
                severity: self.severity(),
                kind: DiagnosticKind::OutputConflict,
                message: format!(
                    "Output-to-output connection between {} and {}",
                    describe(start),
                    describe(end)
                ),
                refs: DiagnosticRefs {
                    component_id: Some(start.component_id),
                    pin_id: Some(start.pin_id.clone()),
                    wire_id: Some(wire.id),
                },
            });
        }
    }
}

/// Hinweis auf Teilschaltungen bei großen Schaltplänen.
pub struct ComplexityRule;

impl DiagnosticRule for ComplexityRule {
    fn id(&self) -> &'static str {
        "complexity"
    }

    fn severity(&self) -> Severity {
        Severity::Suggestion
    }

    fn check(&self, schematic: &Schematic, _library: &ComponentLibrary, out: &mut Vec<Diagnostic>) {
        if schematic.component_count() >= COMPLEXITY_MIN_COMPONENTS
            && schematic.wire_count() >= COMPLEXITY_MIN_WIRES
        {
            out.push(Diagnostic {
                severity: self.severity(),
                kind: DiagnosticKind::Complexity,
                message: "Consider creating a custom component from this circuit to simplify your design"
                    .to_string(),
                refs: DiagnosticRefs::default(),
            });
        }
    }
}

/// Führt Regeln in fester Reihenfolge aus
pub struct DiagnosticsEngine {
    rules: Vec<Box<dyn DiagnosticRule>>,
}

impl DiagnosticsEngine {
    /// Leere Engine ohne Regeln.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Standard-Regeln: Floating Input, Self-Short, Output-Konflikt, Komplexität.
    pub fn with_default_rules() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(FloatingInputRule));
        engine.add_rule(Box::new(SelfShortRule));
        engine.add_rule(Box::new(OutputConflictRule));
        engine.add_rule(Box::new(ComplexityRule));
        engine
    }

    /// Hängt eine Regel hinten an.
    pub fn add_rule(&mut self, rule: Box<dyn DiagnosticRule>) {
        self.rules.push(rule);
    }

    /// IDs der Regeln in Ausführungsreihenfolge.
    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Berechnet alle Diagnosen vollständig neu.
    pub fn run(&self, schematic: &Schematic, library: &ComponentLibrary) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for rule in &self.rules {
            rule.check(schematic, library, &mut diagnostics);
        }
        diagnostics
    }
}

impl Default for DiagnosticsEngine {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

/// Diagnostiziert das Modell mit den Standard-Regeln.
pub fn diagnose(schematic: &Schematic, library: &ComponentLibrary) -> Vec<Diagnostic> {
    DiagnosticsEngine::with_default_rules().run(schematic, library)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn place(schematic: &mut Schematic, library: &ComponentLibrary, name: &str, pos: Vec2) -> u64 {
        schematic.place_component(library.get(name).expect("Typ vorhanden"), pos).expect("ID frei")
    }

    #[test]
    fn test_empty_model_has_no_diagnostics() {
        let library = ComponentLibrary::builtin();
        assert!(diagnose(&Schematic::new(), &library).is_empty());
    }

    #[test]
    fn test_single_input_component_reports_one_floating_input() {
        let library = ComponentLibrary::builtin();
        let mut schematic = Schematic::new();
        let id = place(&mut schematic, &library, "NOT", Vec2::ZERO);

        let diagnostics = diagnose(&schematic, &library);
        assert_eq!(diagnostics.len(), 1);
        let d = &diagnostics[0];
        assert_eq!(d.severity, Severity::Error);
        assert_eq!(d.kind, DiagnosticKind::FloatingInput);
        assert_eq!(d.pin(), Some(PinRef::new(id, "A")));
        assert_eq!(d.message, "Floating input on NOT Gate (A)");
    }

    #[test]
    fn test_connected_input_is_not_floating() {
        let library = ComponentLibrary::builtin();
        let mut schematic = Schematic::new();
        let not = place(&mut schematic, &library, "NOT", Vec2::ZERO);
        schematic
            .add_wire(
                vec![Vec2::new(-40.0, 25.0), Vec2::new(0.0, 25.0)],
                None,
                Some(PinRef::new(not, "A")),
            )
            .expect("Leitung angelegt");
        assert!(diagnose(&schematic, &library).is_empty());
    }

    #[test]
    fn test_self_short_references_wire() {
        let library = ComponentLibrary::builtin();
        let mut schematic = Schematic::new();
        let not = place(&mut schematic, &library, "NOT", Vec2::ZERO);
        let pin = PinRef::new(not, "Y");
        let wire = schematic
            .add_wire(
                vec![Vec2::new(60.0, 25.0), Vec2::new(80.0, 25.0), Vec2::new(60.0, 25.0)],
                Some(pin.clone()),
                Some(pin),
            )
            .expect("Leitung angelegt");

        let diagnostics = diagnose(&schematic, &library);
        let short = diagnostics
            .iter()
            .find(|d| d.kind == DiagnosticKind::SelfShort)
            .expect("Self-Short erkannt");
        assert_eq!(short.severity, Severity::Error);
        assert_eq!(short.refs.wire_id, Some(wire));
        // Ausgang mit sich selbst zählt auch als Ausgang-Ausgang
        assert!(diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::OutputConflict));
    }

    #[test]
    fn test_output_conflict_is_warning() {
        let library = ComponentLibrary::builtin();
        let mut schematic = Schematic::new();
        let a = place(&mut schematic, &library, "AND", Vec2::ZERO);
        let b = place(&mut schematic, &library, "OR", Vec2::new(0.0, 100.0));
        schematic
            .add_wire(
                vec![Vec2::new(60.0, 25.0), Vec2::new(60.0, 125.0)],
                Some(PinRef::new(a, "Y")),
                Some(PinRef::new(b, "Y")),
            )
            .expect("Leitung angelegt");
        // Beschriftungen tauchen in der Meldung nicht auf
        schematic.set_component_value(a, "U1");
        let diagnostics = diagnose(&schematic, &library);
        let conflicts: Vec<_> = diagnostics
            .iter()
            .filter(|d| d.kind == DiagnosticKind::OutputConflict)
            .collect();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].severity, Severity::Warning);
        assert_eq!(
            conflicts[0].message,
            "Output-to-output connection between AND.Y and OR.Y"
        );
    }

    #[test]
    fn test_rules_run_in_fixed_order() {
        let library = ComponentLibrary::builtin();
        let mut schematic = Schematic::new();
        let mut ids = Vec::new();
        for i in 0..5 {
            ids.push(place(&mut schematic, &library, "AND", Vec2::new(i as f32 * 100.0, 0.0)));
        }
        // Eine Self-Short-Leitung am Ausgang, Rest lose
        let pin = PinRef::new(ids[0], "Y");
        schematic
            .add_wire(
                vec![Vec2::new(60.0, 25.0), Vec2::new(60.0, 25.0)],
                Some(pin.clone()),
                Some(pin),
            )
            .expect("Leitung angelegt");
        for i in 0..7 {
            let y = 200.0 + i as f32 * 10.0;
            schematic
                .add_wire(vec![Vec2::new(0.0, y), Vec2::new(50.0, y)], None, None)
                .expect("Leitung angelegt");
        }

        let kinds: Vec<DiagnosticKind> = diagnose(&schematic, &library)
            .into_iter()
            .map(|d| d.kind)
            .collect();
        let mut expected = vec![DiagnosticKind::FloatingInput; 10];
        expected.push(DiagnosticKind::SelfShort);
        expected.push(DiagnosticKind::OutputConflict);
        expected.push(DiagnosticKind::Complexity);
        assert_eq!(kinds, expected);
    }

    #[test]
    fn test_diagnose_is_deterministic() {
        let library = ComponentLibrary::builtin();
        let mut schematic = Schematic::new();
        place(&mut schematic, &library, "FLIPFLOP", Vec2::ZERO);
        place(&mut schematic, &library, "MEMORY", Vec2::new(100.0, 0.0));
        let first = diagnose(&schematic, &library);
        let second = diagnose(&schematic, &library);
        assert_eq!(first, second);
        assert_eq!(first.len(), 7);
    }

    #[test]
    fn test_default_rule_order() {
        let engine = DiagnosticsEngine::with_default_rules();
        assert_eq!(
            engine.rule_ids(),
            vec!["floating_input", "self_short", "output_conflict", "complexity"]
        );
    }
}
