// semaforo/src/log.rs
// Logger mínimo sin std::sync::Mutex, con prefijo de milisegundos transcurridos
// desde el arranque. Por defecto imprime a consola; se puede redirigir con
// set_logger(fn(&str)) antes de correr la simulación.

use core::sync::atomic::{AtomicPtr, Ordering};
use once_cell::sync::Lazy;
use std::time::Instant;

type LogFn = fn(&str);

// instante de arranque para sellar cada línea; el tiempo es lo observable aquí
static START: Lazy<Instant> = Lazy::new(Instant::now);

fn default_log(s: &str) {
    println!("[{:>6}ms] {}", START.elapsed().as_millis(), s);
}

// Almacena un puntero a función; sin Mutex. Se asume set_logger() se llama antes de uso concurrente.
static LOGGER_PTR: AtomicPtr<()> = AtomicPtr::new(default_log as *mut ());

#[inline]
pub fn set_logger(f: LogFn) {
    LOGGER_PTR.store(f as *mut (), Ordering::Relaxed);
}

#[inline]
pub fn log_str(s: &str) {
    let p = LOGGER_PTR.load(Ordering::Relaxed);
    let f: LogFn = unsafe { core::mem::transmute(p) };
    f(s);
}

#[macro_export]
macro_rules! sem_log {
    ($($arg:tt)*) => {{
        $crate::log::log_str(&format!($($arg)*));
    }};
}
