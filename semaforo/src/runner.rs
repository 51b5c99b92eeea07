// Demo de la simulación: un semáforo y varios vehículos esperando el verde

use crate::config::SimConfig;
use crate::sem_log;
use crate::sim::{create_shared_light, SharedLight};
use rand_distr::{Distribution, Exp};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

static NEXT_VEHICLE_ID: AtomicU32 = AtomicU32::new(1);
fn get_next_vehicle_id() -> u32 {
    NEXT_VEHICLE_ID.fetch_add(1, Ordering::Relaxed)
}

/// Reloj de llegadas: sortea la demora entre un vehículo y el siguiente
struct ArrivalClock {
    rng: rand::rngs::ThreadRng,
    inter_arrival: Exp<f64>,
}

impl ArrivalClock {
    fn new(mean_arrival_ms: u64) -> Self {
        Self {
            rng: rand::rng(),
            inter_arrival: Exp::new(1.0 / mean_arrival_ms as f64).unwrap(),
        }
    }

    fn next_delay(&mut self) -> Duration {
        Duration::from_millis(self.inter_arrival.sample(&mut self.rng) as u64)
    }
}

pub fn run_simulation(config: SimConfig) {
    sem_log!("╔════════════════════════════════════════════════════════════╗");
    sem_log!("║               Semáforo - Simulación                        ║");
    sem_log!("╚════════════════════════════════════════════════════════════╝");
    sem_log!(
        "Ciclo sorteado entre {}ms y {}ms, {} vehículos",
        config.light.min_cycle_ms,
        config.light.max_cycle_ms,
        config.vehicles
    );

    // --- CREACIÓN DEL SEMÁFORO ---
    let light = create_shared_light(config.light);
    light.simulate();
    sem_log!("🚦 Semáforo iniciado en {:?}", light.current_phase());

    // --- CONTADOR TOTAL ---
    let crossed = Arc::new(AtomicU32::new(0));
    let mut handles = Vec::new();
    let mut arrivals = ArrivalClock::new(config.mean_arrival_ms);

    // --- CREACIÓN DE VEHÍCULOS OBSERVADORES ---
    for _ in 0..config.vehicles {
        thread::sleep(arrivals.next_delay());
        let id = get_next_vehicle_id();
        let light: SharedLight = Arc::clone(&light);
        let crossed = Arc::clone(&crossed);

        let handle = thread::Builder::new()
            .name(format!("Vehiculo-{}", id))
            .spawn(move || {
                sem_log!("🚗 Vehículo-{} esperando el verde...", id);
                light.wait_for_green();
                sem_log!("✅ Vehículo-{} cruza la intersección", id);
                crossed.fetch_add(1, Ordering::Relaxed);
            })
            .expect("No se pudo crear el hilo del vehículo");

        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    sem_log!("╔════════════════════════════════════════════════════════════╗");
    sem_log!("║               Simulación finalizada                        ║");
    sem_log!("╚════════════════════════════════════════════════════════════╝");
    sem_log!("Vehículos que cruzaron: {}", crossed.load(Ordering::Relaxed));
}
