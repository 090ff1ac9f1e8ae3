/// Host per-frame scheduler.
///
/// `request_tick` registers interest in one more frame callback. Requests are
/// one-shot: the renderer asks again after every tick that leaves work behind.
pub trait TickScheduler {
    fn request_tick(&self);
}
