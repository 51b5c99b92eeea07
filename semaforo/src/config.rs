// configuracion de tiempos del semaforo y parametros del demo

/// Ventana de duración de cada fase, en milisegundos.
///
/// Cada ciclo del semáforo se sortea uniforme en el intervalo cerrado
/// `[min_cycle_ms, max_cycle_ms]`. Los tests inyectan ventanas cortas
/// para no esperar segundos reales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightConfig {
    pub min_cycle_ms: u64,
    pub max_cycle_ms: u64,
}

impl LightConfig {
    /// # Panics
    /// Si `min_cycle_ms` es 0 o mayor que `max_cycle_ms`.
    pub fn new(min_cycle_ms: u64, max_cycle_ms: u64) -> Self {
        if min_cycle_ms == 0 {
            panic!("min_cycle_ms debe ser positivo");
        }
        if min_cycle_ms > max_cycle_ms {
            panic!("min_cycle_ms no puede superar max_cycle_ms");
        }
        Self {
            min_cycle_ms,
            max_cycle_ms,
        }
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        // comportamiento de referencia: cada fase dura entre 4 y 6 segundos
        Self {
            min_cycle_ms: 4000,
            max_cycle_ms: 6000,
        }
    }
}

/// Parámetros de la simulación demo de `runner`
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    pub light: LightConfig,
    pub vehicles: u32,
    /// demora media entre llegadas de vehículos a la intersección
    pub mean_arrival_ms: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            light: LightConfig::default(),
            vehicles: 4,
            mean_arrival_ms: 300,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_window() {
        let config = LightConfig::default();

        assert_eq!(config.min_cycle_ms, 4000);
        assert_eq!(config.max_cycle_ms, 6000);
    }

    #[test]
    fn test_new_accepts_valid_window() {
        let config = LightConfig::new(50, 50);

        assert_eq!(config.min_cycle_ms, config.max_cycle_ms);
    }

    #[test]
    #[should_panic]
    fn test_rejects_inverted_window() {
        LightConfig::new(500, 100);
    }

    #[test]
    #[should_panic]
    fn test_rejects_zero_min() {
        LightConfig::new(0, 100);
    }
}
