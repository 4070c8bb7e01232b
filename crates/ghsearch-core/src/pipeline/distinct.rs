/// Consecutive-only deduplication: a value equal to the previously
/// accepted one is rejected.
#[derive(Debug)]
pub struct DistinctUntilChanged<T> {
    last: Option<T>,
}

impl<T> Default for DistinctUntilChanged<T> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<T: PartialEq + Clone> DistinctUntilChanged<T> {
    pub fn accept(&mut self, value: &T) -> bool {
        if self.last.as_ref() == Some(value) {
            false
        } else {
            self.last = Some(value.clone());
            true
        }
    }
}
