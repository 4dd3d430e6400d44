use yew::prelude::*;

use crate::components::animated_counter::AnimatedCounter;

struct Stat {
    target: i64,
    suffix: &'static str,
    // Shown beside the number in its own style rather than animated with it
    unit: Option<&'static str>,
    label: &'static str,
}

const STATS: [Stat; 4] = [
    Stat { target: 2000, suffix: "", unit: Some("萬+"), label: "真實行為數據" },
    Stat { target: 150_000, suffix: "+", unit: None, label: "實體觀測據點" },
    Stat { target: 50_000, suffix: "+", unit: None, label: "網站流量觀測" },
    Stat { target: 605, suffix: "", unit: None, label: "產業類別標籤" },
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about-section">
            <div class="about-grid">
                <div class="about-intro">
                    <p class="eyebrow">{"ABOUT MOTIX LAB"}</p>
                    <h2>{"從人潮洞察走向商業前瞻"}</h2>
                    <div class="about-callout">
                        <p>
                            {"Motix Lab 是 "}<span class="accent">{"MESh+"}</span>
                            {" 旗下的數據洞察實驗室，以電信數據為核心。"}
                        </p>
                    </div>
                </div>
                <div class="about-detail">
                    <p>{"我們追蹤人潮如何在不同地點與生活情境中跨場域流動，並進一步解析這些移動如何跨渠道影響品牌接觸、消費路徑與商業決策。"}</p>
                    <p>{"Motix Lab 以可驗證的方法與可落地的指標，將複雜的人潮流動行為，轉化為可讀懂變化、比較趨勢、判斷策略。"}</p>
                    <div class="stats-grid">
                        { for STATS.iter().map(|stat| html! {
                            <div class="stat" key={stat.label}>
                                <div class="stat-value">
                                    <span class="stat-number">
                                        <AnimatedCounter target={stat.target} suffix={stat.suffix.to_string()} />
                                    </span>
                                    if let Some(unit) = stat.unit {
                                        <span class="stat-unit">{ unit }</span>
                                    }
                                </div>
                                <p class="stat-label">{ stat.label }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
