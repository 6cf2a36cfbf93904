use super::{ButtonEvent, DisplaySink};
use crate::blink::TickScheduler;
use crate::session::Session;

/// Route a debounced button press to the active focus state.
pub fn handle_button<D, S>(session: &mut Session<D, S>, event: ButtonEvent)
where
    D: DisplaySink,
    S: TickScheduler,
{
    match event {
        ButtonEvent::Up => session.on_increment(),
        ButtonEvent::Down => session.on_decrement(),
        ButtonEvent::Select => {
            session.on_confirm();
        }
    }
}

/// Whether holding `event` down should auto-repeat it.
pub fn repeats_while_held(event: ButtonEvent) -> bool {
    !matches!(event, ButtonEvent::Select)
}
