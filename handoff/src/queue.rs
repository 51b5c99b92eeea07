// cola FIFO protegida por mutex + condvar
// el productor nunca se bloquea, el consumidor espera hasta que haya datos

use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex};

/// estado interno compartido entre todos los handles clonados
struct Inner<T> {
    items: Mutex<VecDeque<T>>,
    ready: Condvar,
}

/// Cola FIFO thread-safe sin límite de tamaño.
///
/// `send` encola y despierta a lo sumo un consumidor bloqueado; `receive`
/// suspende al hilo llamador hasta que exista un elemento. Clonar el handle
/// comparte la misma cola (solo se clona el `Arc` interno).
pub struct BlockingQueue<T> {
    inner: Arc<Inner<T>>,
}

impl<T> BlockingQueue<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                items: Mutex::new(VecDeque::new()),
                ready: Condvar::new(),
            }),
        }
    }

    /// Encola un valor al final y despierta a un consumidor si hay alguno.
    ///
    /// Nunca falla ni se bloquea: la sección crítica cubre solo el append.
    pub fn send(&self, value: T) {
        let mut items = self.inner.items.lock().unwrap();
        items.push_back(value);
        drop(items);
        // notify fuera del lock para que el despertado no choque con el mutex
        self.inner.ready.notify_one();
    }

    /// Saca el primer elemento, bloqueando al hilo hasta que exista uno.
    ///
    /// La condición se re-evalúa al despertar, así que un wakeup espurio
    /// vuelve a esperar en lugar de retornar con la cola vacía.
    pub fn receive(&self) -> T {
        let mut items = self.inner.items.lock().unwrap();
        loop {
            if let Some(value) = items.pop_front() {
                return value;
            }
            items = self.inner.ready.wait(items).unwrap();
        }
    }

    /// Intenta sacar el primer elemento sin bloquearse.
    pub fn try_receive(&self) -> Option<T> {
        self.inner.items.lock().unwrap().pop_front()
    }

    /// Cantidad de elementos pendientes.
    pub fn len(&self) -> usize {
        self.inner.items.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Clone for BlockingQueue<T> {
    // clon barato: comparte la misma cola
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for BlockingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_queue_is_empty() {
        let queue: BlockingQueue<u32> = BlockingQueue::new();

        assert!(queue.is_empty(), "La cola nueva debe estar vacía");
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.try_receive(), None);
    }

    #[test]
    fn test_send_grows_queue() {
        let queue = BlockingQueue::new();

        queue.send(1);
        queue.send(2);
        queue.send(3);

        assert_eq!(queue.len(), 3, "Debe haber 3 elementos encolados");
    }

    #[test]
    fn test_try_receive_pops_in_order() {
        let queue = BlockingQueue::new();

        queue.send("a");
        queue.send("b");

        assert_eq!(queue.try_receive(), Some("a"));
        assert_eq!(queue.try_receive(), Some("b"));
        assert_eq!(queue.try_receive(), None);
    }

    #[test]
    fn test_clone_shares_storage() {
        let queue = BlockingQueue::new();
        let handle = queue.clone();

        handle.send(7);

        assert_eq!(queue.receive(), 7, "El clon comparte la misma cola");
        assert!(handle.is_empty());
    }
}
