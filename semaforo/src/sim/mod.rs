// Sistema de simulacion del semaforo

mod light;

pub use light::TrafficLight;

use crate::config::LightConfig;
use std::sync::Arc;

/// Handle compartido del semáforo para los hilos observadores
pub type SharedLight = Arc<TrafficLight>;

pub fn create_shared_light(config: LightConfig) -> SharedLight {
    Arc::new(TrafficLight::new(config))
}
