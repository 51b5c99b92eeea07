// fases del semaforo

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Red,
    Green,
}

impl Phase {
    /// la fase opuesta, un toggle la produce
    pub fn other(self) -> Phase {
        match self {
            Phase::Red => Phase::Green,
            Phase::Green => Phase::Red,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_flips_phase() {
        assert_eq!(Phase::Red.other(), Phase::Green);
        assert_eq!(Phase::Green.other(), Phase::Red);
    }

    #[test]
    fn test_double_toggle_returns_to_start() {
        assert_eq!(Phase::Red.other().other(), Phase::Red);
    }
}
