use yew::prelude::*;

use crate::browser::scroll_to_section;
use crate::components::insight_highlight::InsightHighlight;
use crate::config;
use crate::pages::about::About;
use crate::pages::capabilities::Capabilities;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let to_download = Callback::from(|_: ()| scroll_to_section(config::DOWNLOAD_SECTION_ID));

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        background: #0a0a0b;
                        color: #fff;
                        font-family: "Noto Sans TC", sans-serif;
                    }
                    .landing-page section {
                        scroll-margin-top: 5rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .eyebrow {
                        color: #397bff;
                        font-weight: 900;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                    }
                    .section-heading {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-heading h2 {
                        font-size: 2.5rem;
                        font-weight: 800;
                    }
                    .section-cta {
                        display: flex;
                        justify-content: center;
                        margin-top: 5rem;
                    }
                    .cta-button {
                        padding: 1.25rem 3rem;
                        border: 2px solid #fff;
                        border-radius: 9999px;
                        background: transparent;
                        color: #fff;
                        font-weight: 900;
                        letter-spacing: 0.1em;
                        cursor: pointer;
                        transition: all 0.5s;
                    }
                    .cta-button:hover {
                        background: #397bff;
                        border-color: #397bff;
                    }
                    .about-section {
                        padding: 12rem 2.5rem;
                        background-image: radial-gradient(circle at 1px 1px, rgba(255, 255, 255, 0.08) 1px, transparent 0);
                        background-size: 32px 32px;
                    }
                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr 2fr;
                        gap: 2.5rem;
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .about-callout {
                        padding: 2rem;
                        border-left: 4px solid #397bff;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.03);
                    }
                    .accent { color: #397bff; }
                    .stats-grid {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        gap: 4rem;
                        margin-top: 5rem;
                    }
                    .stat-value {
                        display: flex;
                        align-items: flex-end;
                        white-space: nowrap;
                    }
                    .stat-number {
                        font-size: clamp(28px, 4.2vw, 72px);
                        font-weight: 900;
                        line-height: 0.85;
                    }
                    .stat-unit {
                        font-size: clamp(16px, 1.8vw, 32px);
                        font-weight: 900;
                        margin-left: 0.25rem;
                    }
                    .stat-label {
                        color: #397bff;
                        font-weight: 900;
                        letter-spacing: 0.2em;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                        padding-top: 1rem;
                    }
                    .tabular-nums { font-variant-numeric: tabular-nums; }
                    .capabilities-section {
                        padding: 12rem 1.5rem;
                        background: #000;
                    }
                    .capability-list {
                        display: flex;
                        flex-direction: column;
                        gap: 2.5rem;
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .capability-card {
                        display: flex;
                        gap: 3rem;
                        padding: 3.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        border-radius: 40px;
                    }
                    .capability-badge {
                        flex-shrink: 0;
                        width: 2.75rem;
                        height: 2.75rem;
                        border-radius: 50%;
                        background: #397bff;
                        color: #000;
                        font-weight: 900;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .download-section {
                        padding: 8rem 1.5rem;
                        text-align: center;
                    }
                    @media (max-width: 1024px) {
                        .about-grid { grid-template-columns: 1fr; }
                        .stats-grid { display: grid; grid-template-columns: 1fr 1fr; }
                        .capability-card { flex-direction: column; align-items: center; }
                    }
                "#}
            </style>
            <About />
            <Capabilities on_navigate={to_download.clone()} />
            <InsightHighlight on_navigate={to_download} />
            <DownloadSection />
        </div>
    }
}

/// Target of every "get the full report" button.
#[function_component(DownloadSection)]
pub fn download_section() -> Html {
    html! {
        <section id={config::DOWNLOAD_SECTION_ID} class="download-section">
            <div class="section-heading">
                <p class="eyebrow">{"Full Report"}</p>
                <h2>{"下載完整產業洞察報告"}</h2>
            </div>
            <p>{"留下聯絡資訊，我們將寄送最新一期的完整報告給您。"}</p>
        </section>
    }
}
