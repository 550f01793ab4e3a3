use std::cell::Cell;
use std::rc::Rc;

/// A test value that bumps a shared counter every time an instance is dropped. Clones share the
/// counter, so the total tells how many values a collection released.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(value)))
    }

    pub fn take(&self) -> usize {
        self.0.take()
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
