/// Records addressed by an integer primary key assigned by the store.
pub trait Identifiable {
    fn id(&self) -> i32;
    fn set_id(&mut self, id: i32);
}
