use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub exponent: f64,
    pub coefficient: f64,
}

impl Primitive {
    pub fn new(exponent: f64, coefficient: f64) -> Self {
        Self {
            exponent,
            coefficient,
        }
    }
}

/// Contracted atomic orbital shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AoShell {
    /// 0-based index of the atom the shell is centered on.
    pub atom: usize,
    /// Shell label: `"s"`, `"p"`, `"d"`, ... or an explicit cartesian
    /// component such as `"xy"`.
    pub kind: String,
    pub primitives: Vec<Primitive>,
    /// Explicit `(l, m)` components for spherical shells.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lm: Option<Vec<(i32, i32)>>,
}

impl AoShell {
    pub fn new(atom: usize, kind: impl Into<String>, primitives: Vec<Primitive>) -> Self {
        Self {
            atom,
            kind: kind.into(),
            primitives,
            lm: None,
        }
    }

    #[inline]
    pub fn contraction_count(&self) -> usize {
        self.primitives.len()
    }
}

/// Spherical harmonic component of a shell, `(l, m)` on shell `shell`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SphericalComponent {
    pub shell: usize,
    pub l: i32,
    pub m: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_counts_primitives() {
        let shell = AoShell::new(
            0,
            "s",
            vec![
                Primitive::new(3.42525091, 0.15432897),
                Primitive::new(0.62391373, 0.53532814),
            ],
        );
        assert_eq!(shell.contraction_count(), 2);
        assert!(shell.lm.is_none());
    }
}
