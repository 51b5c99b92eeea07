// Semaforo con hilo ciclador en segundo plano
// el ciclador alterna Red/Green en una cadencia aleatoria y publica cada
// transicion en la cola; los observadores drenan la cola hasta ver su fase

use crate::config::LightConfig;
use crate::model::Phase;
use crate::sem_log;
use handoff::BlockingQueue;
use once_cell::sync::OnceCell;
use rand::Rng;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

const RED: u8 = 0;
const GREEN: u8 = 1;

/// Fase actual como valor atómico, para lecturas sin lock desde cualquier hilo
struct AtomicPhase(AtomicU8);

impl AtomicPhase {
    fn new(phase: Phase) -> Self {
        Self(AtomicU8::new(encode(phase)))
    }

    fn load(&self) -> Phase {
        decode(self.0.load(Ordering::Acquire))
    }

    fn store(&self, phase: Phase) {
        self.0.store(encode(phase), Ordering::Release);
    }
}

fn encode(phase: Phase) -> u8 {
    match phase {
        Phase::Red => RED,
        Phase::Green => GREEN,
    }
}

fn decode(raw: u8) -> Phase {
    match raw {
        GREEN => Phase::Green,
        _ => Phase::Red,
    }
}

/// estado compartido entre la API pública y el hilo ciclador
struct LightState {
    current: AtomicPhase,
    queue: BlockingQueue<Phase>,
    config: LightConfig,
}

impl LightState {
    // alterna la fase y devuelve el valor nuevo
    // solo el hilo ciclador escribe la fase, no hay carrera de escritura
    fn toggle(&self) -> Phase {
        let next = self.current.load().other();
        self.current.store(next);
        next
    }
}

/// Semáforo de dos fases con ciclado autónomo.
///
/// Arranca en `Red` con la cola vacía. `simulate` lanza una única vez el
/// hilo que alterna la fase en una cadencia sorteada y publica cada
/// transición; cualquier cantidad de hilos puede bloquearse en
/// `wait_for_green` esperando el siguiente verde. No existe protocolo de
/// apagado: el ciclador vive lo que viva el proceso.
pub struct TrafficLight {
    state: Arc<LightState>,
    cycler: OnceCell<JoinHandle<()>>,
}

impl TrafficLight {
    pub fn new(config: LightConfig) -> Self {
        Self {
            state: Arc::new(LightState {
                current: AtomicPhase::new(Phase::Red),
                queue: BlockingQueue::new(),
                config,
            }),
            cycler: OnceCell::new(),
        }
    }

    /// Lanza el hilo ciclador y retorna de inmediato.
    ///
    /// Solo la primera llamada crea el hilo; las siguientes no hacen nada.
    pub fn simulate(&self) {
        self.cycler.get_or_init(|| {
            let state = Arc::clone(&self.state);
            thread::Builder::new()
                .name("semaforo-ciclador".into())
                .spawn(move || cycle_through_phases(state))
                .expect("No se pudo crear el hilo ciclador")
        });
    }

    /// Fase actual, lectura atómica de mejor esfuerzo.
    /// No está ordenada respecto a la entrega por la cola.
    pub fn current_phase(&self) -> Phase {
        self.state.current.load()
    }

    /// Bloquea hasta drenar de la cola la próxima transición a verde.
    ///
    /// Si el semáforo ya está en verde igual se espera la *próxima*
    /// transición Red -> Green: la cola publica cambios, no estados.
    pub fn wait_for_green(&self) {
        self.wait_for_phase(Phase::Green);
    }

    /// Forma general: drena la cola descartando valores hasta ver `wanted`.
    pub fn wait_for_phase(&self, wanted: Phase) {
        loop {
            if self.state.queue.receive() == wanted {
                return;
            }
        }
    }

    /// true si el hilo ciclador ya fue lanzado
    pub fn is_cycling(&self) -> bool {
        self.cycler.get().is_some()
    }

    /// Transiciones publicadas que nadie consumió todavía.
    /// Crece sin límite mientras nadie llame a `wait_for_green`.
    pub fn pending_transitions(&self) -> usize {
        self.state.queue.len()
    }
}

impl Default for TrafficLight {
    fn default() -> Self {
        Self::new(LightConfig::default())
    }
}

// Bucle perpetuo del ciclador: sortea la duración del ciclo, duerme hasta
// cumplirla, alterna la fase y publica el valor nuevo. El sleep cubre la
// duración completa, no hay sondeo de 1ms.
fn cycle_through_phases(state: Arc<LightState>) {
    let mut rng = rand::rng();

    loop {
        let duration_ms =
            rng.random_range(state.config.min_cycle_ms..=state.config.max_cycle_ms);
        thread::sleep(Duration::from_millis(duration_ms));

        let next = state.toggle();
        state.queue.send(next);

        sem_log!("🚦 Semáforo cambió a {:?} tras {}ms", next, duration_ms);
    }
}
