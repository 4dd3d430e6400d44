use gloo_timers::callback::Timeout;
use log::error;
use yew::prelude::*;

use crate::browser::BrowserImageLoader;
use crate::config;
use crate::insights::{Catalog, ImageState, LoadTicket, MediaPanel, TagId};

#[derive(Properties, PartialEq)]
pub struct InsightHighlightProps {
    /// Fired by the "view data" buttons.
    pub on_navigate: Callback<()>,
}

pub enum InsightMsg {
    Select(TagId),
    Preloaded(String),
    PreloadFailed(String),
    DisplayLoaded(LoadTicket, String),
    DisplayFailed(LoadTicket),
}

pub struct InsightHighlight {
    panel: Option<MediaPanel>,
    loader: BrowserImageLoader,
    load_timeout: Option<Timeout>,
}

impl InsightHighlight {
    // Falls back to the failure caption if the current image never answers
    fn arm_timeout(&mut self, ctx: &Context<Self>) {
        if let Some(panel) = &self.panel {
            let ticket = panel.ticket();
            let link = ctx.link().clone();
            self.load_timeout = Some(Timeout::new(config::IMAGE_LOAD_TIMEOUT_MS, move || {
                link.send_message(InsightMsg::DisplayFailed(ticket));
            }));
        }
    }
}

impl Component for InsightHighlight {
    type Message = InsightMsg;
    type Properties = InsightHighlightProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut loader = BrowserImageLoader::new(
            ctx.link().callback(InsightMsg::Preloaded),
            ctx.link().callback(InsightMsg::PreloadFailed),
        );
        let panel = match Catalog::bundled() {
            Ok(catalog) => Some(MediaPanel::new(catalog, &mut loader)),
            Err(err) => {
                error!("Insight panel disabled: {}", err);
                None
            }
        };

        let mut highlight = Self {
            panel,
            loader,
            load_timeout: None,
        };
        highlight.arm_timeout(ctx);
        highlight
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let panel = match self.panel.as_mut() {
            Some(panel) => panel,
            None => return false,
        };

        match msg {
            InsightMsg::Select(id) => {
                let changed = panel.select_tag(&id, &mut self.loader);
                if changed {
                    self.arm_timeout(ctx);
                }
                changed
            }
            InsightMsg::Preloaded(url) => {
                panel.record_loaded(&url);
                false
            }
            InsightMsg::PreloadFailed(url) => {
                panel.record_failed(&url);
                false
            }
            InsightMsg::DisplayLoaded(ticket, url) => {
                let cleared = panel.complete_display_load(ticket, &url);
                if cleared {
                    self.load_timeout = None;
                }
                cleared
            }
            InsightMsg::DisplayFailed(ticket) => panel.fail_display_load(ticket),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let panel = match &self.panel {
            Some(panel) => panel,
            None => return html! {},
        };

        let insight = panel.current();
        let url = panel.image_url();
        let ticket = panel.ticket();
        let state = panel.image_state();

        let tags = panel
            .catalog()
            .tags()
            .map(|tag| {
                let id = tag.id.clone();
                let onclick = ctx.link().callback(move |_: MouseEvent| InsightMsg::Select(id.clone()));
                let active = tag.id == panel.selected_tag();
                html! {
                    <button key={tag.id.clone()} class={classes!("insight-tag", active.then(|| "active"))} {onclick}>
                        { tag.label.clone() }
                    </button>
                }
            })
            .collect::<Html>();

        let onload = {
            let url = url.clone();
            ctx.link().callback(move |_: Event| InsightMsg::DisplayLoaded(ticket, url.clone()))
        };
        let onerror = ctx.link().callback(move |_: Event| InsightMsg::DisplayFailed(ticket));

        let navigate = {
            let on_navigate = ctx.props().on_navigate.clone();
            Callback::from(move |_: MouseEvent| on_navigate.emit(()))
        };

        let image_class = match state {
            ImageState::Loading => "insight-image loading",
            ImageState::Ready => "insight-image",
            ImageState::Failed => "insight-image failed",
        };

        html! {
            <section id="insights" class="insights-section">
                <style>
                    {r#"
                        .insights-section {
                            padding: 8rem 1.5rem;
                            background: #000;
                            color: #fff;
                        }
                        .insights-card {
                            max-width: 80rem;
                            margin: 0 auto;
                            border: 1px solid rgba(255, 255, 255, 0.1);
                            border-radius: 48px;
                            overflow: hidden;
                            background: rgba(15, 23, 42, 0.2);
                        }
                        .insight-tags {
                            display: flex;
                            flex-wrap: wrap;
                            justify-content: center;
                            gap: 1rem;
                            padding: 1.5rem;
                            border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        }
                        .insight-tag {
                            padding: 0.75rem 2rem;
                            border-radius: 1rem;
                            border: none;
                            background: transparent;
                            color: #cbd5e1;
                            font-weight: 700;
                            cursor: pointer;
                            transition: all 0.3s;
                        }
                        .insight-tag.active {
                            background: #397bff;
                            color: #fff;
                            transform: scale(1.05);
                        }
                        .insight-body {
                            display: grid;
                            grid-template-columns: 1fr 2fr;
                        }
                        .insight-text {
                            padding: 4rem;
                            border-right: 1px solid rgba(255, 255, 255, 0.1);
                        }
                        .insight-media {
                            position: relative;
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            min-height: 400px;
                            padding: 3rem;
                        }
                        .insight-image {
                            max-width: 100%;
                            max-height: 100%;
                            transition: all 1s;
                        }
                        .insight-image.loading {
                            opacity: 0;
                            transform: scale(0.95);
                            filter: blur(40px);
                        }
                        .insight-image.failed {
                            display: none;
                        }
                        .insight-loading {
                            position: absolute;
                            inset: 0;
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            background: rgba(0, 0, 0, 0.4);
                            backdrop-filter: blur(12px);
                        }
                        .insight-spinner {
                            width: 3rem;
                            height: 3rem;
                            border: 4px solid rgba(57, 123, 255, 0.3);
                            border-top-color: #397bff;
                            border-radius: 50%;
                            animation: spin 1s linear infinite;
                        }
                        @keyframes spin {
                            to { transform: rotate(360deg); }
                        }
                        @media (max-width: 1024px) {
                            .insight-body { grid-template-columns: 1fr; }
                            .insight-text { border-right: none; padding: 2.5rem; }
                        }
                    "#}
                </style>
                <div class="section-heading">
                    <p class="eyebrow">{"Analysis Hub"}</p>
                    <h2>{"關鍵產業洞察亮點"}</h2>
                </div>
                <div class="insights-card">
                    <div class="insight-tags">
                        { tags }
                        <span class="insight-more">{"+ 更多產業在完整報告中"}</span>
                    </div>
                    <div class="insight-body">
                        <div class="insight-text">
                            <h3>{ insight.title.clone() }</h3>
                            <p>{ insight.description.clone() }</p>
                            <button class="insight-link" onclick={navigate.clone()}>{"查看深度數據"}</button>
                        </div>
                        <div class="insight-media">
                            if state == ImageState::Loading {
                                <div class="insight-loading"><div class="insight-spinner"></div></div>
                            }
                            if state == ImageState::Failed {
                                <p class="insight-image-fallback">{"圖片暫時無法載入"}</p>
                            }
                            <div class="insight-image-slot">
                                // New element per selection, so each one reports its own load
                                <img key={ticket.to_string()} src={url} alt={insight.title.clone()} class={image_class} {onload} {onerror} />
                            </div>
                        </div>
                    </div>
                </div>
                <div class="section-cta">
                    <button class="cta-button" onclick={navigate}>{"獲取完整產業洞察"}</button>
                </div>
            </section>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.load_timeout = None;
        if let Some(panel) = self.panel.as_mut() {
            panel.teardown();
        }
    }
}
