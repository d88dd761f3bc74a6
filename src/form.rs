// Eingabe-Validierung und Koordination zwischen Formular und Geometrie

use crate::geometry::{Point, Triangle};
use thiserror::Error;

/// Wertebereich der Koordinaten-Slider
pub const COORD_MIN: f64 = -100.0;
pub const COORD_MAX: f64 = 100.0;

/// Beschriftungen der sechs Koordinatenfelder, Reihenfolge wie im Formular
pub const FIELD_LABELS: [&str; 6] = ["X1", "Y1", "X2", "Y2", "X3", "Y3"];

/// Fehler bei der Berechnung
/// Alle drei sind vom Benutzer korrigierbar und werden als Dialog angezeigt;
/// geparst wird bis zum ersten ungültigen Feld
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// Ein Koordinatenfeld war beim Berechnen leer
    #[error("Koordinate {0} ist nicht ausgefüllt")]
    EmptyInput(String),
    /// Feldinhalt ließ sich nicht als Zahl lesen
    #[error("Koordinate {0} muss eine Zahl sein (Dezimalpunkt oder Komma möglich)")]
    InvalidNumber(String),
    /// Alle sechs Koordinaten gültig, aber die Punkte liegen auf einer Geraden
    #[error("Die Punkte liegen auf einer Geraden und bilden kein Dreieck")]
    Degenerate,
}

impl InputError {
    /// Titel für den Fehlerdialog
    pub fn title(&self) -> &'static str {
        match self {
            InputError::EmptyInput(_) => "Eingabefehler",
            InputError::InvalidNumber(_) => "Formatfehler",
            InputError::Degenerate => "Fehler",
        }
    }
}

/// Parst eine Koordinate aus dem Feldtext
/// Komma wird als Dezimaltrennzeichen akzeptiert und zu Punkt normalisiert
pub fn parse_coordinate(raw: &str, label: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::EmptyInput(label.to_string()));
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| InputError::InvalidNumber(label.to_string()))
}

/// Parst alle sechs Feldtexte zu den drei Eckpunkten A, B, C
fn parse_points(fields: &[&str; 6]) -> Result<[Point; 3], InputError> {
    let mut values = [0.0_f64; 6];
    for (value, (raw, label)) in values.iter_mut().zip(fields.iter().zip(FIELD_LABELS)) {
        *value = parse_coordinate(raw, label)?;
    }
    Ok([
        Point::new(values[0], values[1]),
        Point::new(values[2], values[3]),
        Point::new(values[4], values[5]),
    ])
}

/// Ergebnis einer erfolgreichen Berechnung
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculationResult {
    pub perimeter: f64,
    pub area: f64,
}

impl CalculationResult {
    /// Umfang mit 4 Nachkommastellen für die Anzeige
    pub fn perimeter_text(&self) -> String {
        format!("{:.4}", self.perimeter)
    }

    /// Fläche mit 4 Nachkommastellen für die Anzeige
    pub fn area_text(&self) -> String {
        format!("{:.4}", self.area)
    }
}

/// Prüft das Dreieck und liefert Umfang und Fläche
fn evaluate(triangle: &Triangle) -> Result<CalculationResult, InputError> {
    if !triangle.is_triangle() {
        return Err(InputError::Degenerate);
    }
    Ok(CalculationResult {
        perimeter: triangle.perimeter(),
        area: triangle.area(),
    })
}

/// Berechnet Umfang und Fläche aus den sechs Feldtexten
/// Bricht beim ersten ungültigen Feld ab; bei kollinearen Punkten wird
/// kein Teilergebnis geliefert
pub fn calculate_triangle(fields: &[&str; 6]) -> Result<CalculationResult, InputError> {
    let [a, b, c] = parse_points(fields)?;
    evaluate(&Triangle::new(a, b, c))
}

/// Ein Koordinatenfeld mit Textinhalt und zuletzt gültigem Zahlenwert
///
/// Text und Slider beobachten sich nicht gegenseitig; pro Eingabe gewinnt
/// die zuletzt bearbeitete Seite: der Slider schreibt das Echo in den
/// Text, Text-Änderungen werden in den Zahlenwert nachgeparst
#[derive(Clone, Debug)]
pub struct CoordinateField {
    pub label: &'static str,
    pub text: String,
    value: f64,
}

impl CoordinateField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            text: "0.0".to_string(),
            value: 0.0,
        }
    }

    /// Zuletzt gültiger Zahlenwert, treibt den Slider
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Übernimmt einen Slider-Wert und schreibt das Echo in den Text
    pub fn set_from_slider(&mut self, v: f64) {
        self.value = v.clamp(COORD_MIN, COORD_MAX);
        self.text = format!("{:.2}", self.value);
    }

    /// Parst den Text nach einer Tastatureingabe nach
    /// Ungültiger Text lässt den Zahlenwert unverändert; gemeldet wird
    /// der Fehler erst beim Berechnen
    pub fn text_edited(&mut self) {
        if let Ok(v) = parse_coordinate(&self.text, self.label) {
            self.value = v.clamp(COORD_MIN, COORD_MAX);
        }
    }

    /// Setzt das Feld auf den Startzustand zurück
    pub fn reset(&mut self) {
        self.value = 0.0;
        self.text = "0.0".to_string();
    }
}

/// Formularzustand: sechs Koordinatenfelder und das letzte Ergebnis
pub struct TriangleForm {
    pub fields: [CoordinateField; 6],
    pub result: Option<CalculationResult>,
}

impl Default for TriangleForm {
    fn default() -> Self {
        Self {
            fields: FIELD_LABELS.map(CoordinateField::new),
            result: None,
        }
    }
}

impl TriangleForm {
    fn texts(&self) -> [&str; 6] {
        let [x1, y1, x2, y2, x3, y3] = &self.fields;
        [
            x1.text.as_str(),
            y1.text.as_str(),
            x2.text.as_str(),
            y2.text.as_str(),
            x3.text.as_str(),
            y3.text.as_str(),
        ]
    }

    /// Parst alle sechs Felder als Gruppe und berechnet Umfang und Fläche
    /// Bei einem Fehler bleibt kein vorheriges Ergebnis stehen
    pub fn calculate(&mut self) -> Result<CalculationResult, InputError> {
        self.result = None;
        let result = calculate_triangle(&self.texts())?;
        self.result = Some(result);
        Ok(result)
    }

    /// Die drei Eckpunkte aus den aktuellen Feldtexten, falls alle gültig
    pub fn triangle(&self) -> Option<Triangle> {
        let [a, b, c] = parse_points(&self.texts()).ok()?;
        Some(Triangle::new(a, b, c))
    }

    /// Setzt alle Felder auf 0.0 zurück und löscht das Ergebnis
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
        self.result = None;
    }
}
