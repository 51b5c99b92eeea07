// punto de entrada del demo del semaforo

use semaforo::config::SimConfig;
use semaforo::runner::run_simulation;

fn main() {
    run_simulation(SimConfig::default());
}
