/// Page visibility transitions the frame loop reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageEvent {
    Hide,
    /// `persisted` is set when the page comes back from the back/forward cache.
    Show { persisted: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopAction {
    Stop,
    Resume,
    Keep,
}

pub fn loop_action(event: PageEvent, running: bool) -> LoopAction {
    match event {
        PageEvent::Hide if running => LoopAction::Stop,
        PageEvent::Show { persisted: true } if !running => LoopAction::Resume,
        _ => LoopAction::Keep,
    }
}
