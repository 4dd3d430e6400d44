use log::{debug, error};
use web_sys::Element;
use yew::prelude::*;

use crate::browser::{AnimationFrameClock, VisibilityObserver};
use crate::config;
use crate::counter::{CounterAnimation, CounterConfig, FrameOutcome};
use crate::error::ConfigError;

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub target: i64,
    #[prop_or_default]
    pub suffix: String,
    #[prop_or(config::COUNTER_DURATION_MS)]
    pub duration_ms: i64,
    #[prop_or(true)]
    pub group_thousands: bool,
}

pub enum CounterMsg {
    Visibility(f64),
    Frame(f64),
}

/// Counts up from zero the first time it scrolls into view.
pub struct AnimatedCounter {
    node: NodeRef,
    animation: Option<CounterAnimation>,
    clock: AnimationFrameClock,
    observer: Option<VisibilityObserver>,
}

fn build_config(props: &AnimatedCounterProps) -> Result<CounterConfig, ConfigError> {
    Ok(CounterConfig::new(props.target)?
        .duration_ms(props.duration_ms)?
        .suffix(props.suffix.clone())
        .group_thousands(props.group_thousands))
}

impl AnimatedCounter {
    fn watch_visibility(&mut self, ctx: &Context<Self>) {
        if self.observer.is_some() || self.animation.is_none() {
            return;
        }
        if let Some(element) = self.node.cast::<Element>() {
            let on_change = ctx.link().callback(CounterMsg::Visibility);
            match VisibilityObserver::observe(&element, config::VISIBILITY_THRESHOLD, on_change) {
                Ok(observer) => self.observer = Some(observer),
                Err(err) => error!("Could not watch counter visibility: {:?}", err),
            }
        }
    }
}

impl Component for AnimatedCounter {
    type Message = CounterMsg;
    type Properties = AnimatedCounterProps;

    fn create(ctx: &Context<Self>) -> Self {
        let animation = match build_config(ctx.props()) {
            Ok(config) => Some(CounterAnimation::new(config)),
            Err(err) => {
                error!("Counter disabled: {}", err);
                None
            }
        };

        Self {
            node: NodeRef::default(),
            animation,
            clock: AnimationFrameClock::new(ctx.link().callback(CounterMsg::Frame)),
            observer: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let animation = match self.animation.as_mut() {
            Some(animation) => animation,
            None => return false,
        };

        match msg {
            CounterMsg::Visibility(fraction) => {
                if animation.on_visible(fraction, &mut self.clock) {
                    // Runs once per mount, nothing left to watch for
                    if let Some(observer) = &self.observer {
                        observer.disconnect();
                    }
                }
                false
            }
            CounterMsg::Frame(timestamp) => {
                let before = animation.current();
                match animation.on_frame(timestamp, &mut self.clock) {
                    FrameOutcome::Ignored => false,
                    FrameOutcome::Continue | FrameOutcome::Done => animation.current() != before,
                }
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props() == old_props {
            return false;
        }
        match (build_config(ctx.props()), self.animation.as_mut()) {
            (Ok(config), Some(animation)) => {
                if !animation.reconfigure(config) {
                    debug!("Counter already running, keeping its settings");
                }
            }
            (Ok(config), None) => self.animation = Some(CounterAnimation::new(config)),
            (Err(err), _) => error!("Ignoring counter settings: {}", err),
        }
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let text = self
            .animation
            .as_ref()
            .map(CounterAnimation::display)
            .unwrap_or_default();

        html! {
            <span ref={self.node.clone()} class="tabular-nums">{ text }</span>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        // Also covers a counter that only got valid settings after mounting
        self.watch_visibility(ctx);
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.observer.take();
        self.clock.cancel();
    }
}
