use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// The iteration step applied by the escape-time loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormulaKind {
    #[default]
    Mandelbrot,
    BurningShip,
    TriCorn,
    Multibrot3,
    Multibrot4,
    Multibrot5,
    Multibrot6,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFormulaKindError {
    pub input: String,
}

impl fmt::Display for ParseFormulaKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = FormulaKind::ALL.iter().map(|k| k.cli_name()).collect();
        write!(
            f,
            "unknown formula '{}', expected one of: {}",
            self.input,
            names.join(", ")
        )
    }
}

impl Error for ParseFormulaKindError {}

impl FormulaKind {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::BurningShip,
        Self::TriCorn,
        Self::Multibrot3,
        Self::Multibrot4,
        Self::Multibrot5,
        Self::Multibrot6,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::BurningShip => "Burning Ship",
            Self::TriCorn => "Tricorn",
            Self::Multibrot3 => "Multibrot (d=3)",
            Self::Multibrot4 => "Multibrot (d=4)",
            Self::Multibrot5 => "Multibrot (d=5)",
            Self::Multibrot6 => "Multibrot (d=6)",
        }
    }

    #[must_use]
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::BurningShip => "burning-ship",
            Self::TriCorn => "tricorn",
            Self::Multibrot3 => "multibrot3",
            Self::Multibrot4 => "multibrot4",
            Self::Multibrot5 => "multibrot5",
            Self::Multibrot6 => "multibrot6",
        }
    }

    /// One iteration: `z` is the previous value, `c` the constant added back.
    #[inline]
    #[must_use]
    pub fn step(self, z: Complex, c: Complex) -> Complex {
        match self {
            Self::Mandelbrot => z.square() + c,
            Self::BurningShip => z.burning_ship() + c,
            Self::TriCorn => z.tricorn() + c,
            Self::Multibrot3 => z.square() * z + c,
            Self::Multibrot4 => z.square().square() + c,
            Self::Multibrot5 => z.square().square() * z + c,
            Self::Multibrot6 => z.square().square() * z.square() + c,
        }
    }
}

impl fmt::Display for FormulaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for FormulaKind {
    type Err = ParseFormulaKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.cli_name() == wanted)
            .ok_or(ParseFormulaKindError {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const Z: Complex = Complex::new(0.5, -0.25);
    const C: Complex = Complex::new(-0.1, 0.3);

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(FormulaKind::ALL.first(), Some(&FormulaKind::default()));
        assert_eq!(FormulaKind::ALL.len(), 7);
    }

    #[test]
    fn names_are_unique() {
        for (i, kind) in FormulaKind::ALL.iter().enumerate() {
            for other in &FormulaKind::ALL[i + 1..] {
                assert_ne!(kind.display_name(), other.display_name());
                assert_ne!(kind.cli_name(), other.cli_name());
            }
        }
    }

    #[test]
    fn parse_round_trips_cli_names() {
        for &kind in FormulaKind::ALL {
            assert_eq!(kind.cli_name().parse::<FormulaKind>(), Ok(kind));
        }
        assert_eq!("Burning-Ship".parse::<FormulaKind>(), Ok(FormulaKind::BurningShip));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "newton".parse::<FormulaKind>().unwrap_err();

        assert_eq!(err.input, "newton");
        assert!(err.to_string().contains("multibrot6"));
    }

    #[test]
    fn mandelbrot_step_squares_and_adds() {
        assert_eq!(FormulaKind::Mandelbrot.step(Z, C), Z * Z + C);
    }

    #[test]
    fn burning_ship_step_uses_folded_square() {
        // (|0.5|, -|-0.25|)² = (0.25 - 0.0625, -0.25)
        assert_eq!(
            FormulaKind::BurningShip.step(Z, C),
            Complex::new(0.1875 - 0.1, -0.25 + 0.3)
        );
    }

    #[test]
    fn tricorn_step_uses_conjugate_square() {
        // (0.5 + 0.25i)² = (0.1875, 0.25)
        assert_eq!(
            FormulaKind::TriCorn.step(Z, C),
            Complex::new(0.1875 - 0.1, 0.25 + 0.3)
        );
    }

    #[test]
    fn multibrot_steps_raise_to_their_degree() {
        assert_eq!(FormulaKind::Multibrot3.step(Z, C), Z * Z * Z + C);
        assert_eq!(FormulaKind::Multibrot4.step(Z, C), (Z * Z) * (Z * Z) + C);
        assert_eq!(FormulaKind::Multibrot5.step(Z, C), (Z * Z) * (Z * Z) * Z + C);
        assert_eq!(
            FormulaKind::Multibrot6.step(Z, C),
            (Z * Z) * (Z * Z) * (Z * Z) + C
        );
    }
}
