use yew::prelude::*;

struct Capability {
    title: &'static str,
    description: &'static str,
}

const CAPABILITIES: [Capability; 3] = [
    Capability {
        title: "真實受眾洞察",
        description: "透過 2,000 萬真實數據來定義目標客群，提供實際使用者輪廓與高偏好瀏覽行為分析，協助品牌跳脫主觀想像。",
    },
    Capability {
        title: "即時市場情報",
        description: "50,000+ 網站、150,000 實體據點數據與 605 個產業標籤，精確量化市場與品牌聲量。幫助您立即確認品牌目前地位，並為商務指引戰略方向。",
    },
    Capability {
        title: "跨渠道探勘",
        description: "串聯線上線下接觸點，還原消費者從「看見」到「造訪」的完整路徑。辨識各渠道的影響角色與關鍵節點，協助品牌優化媒體配置、門市策略與活動規劃。",
    },
];

#[derive(Properties, PartialEq)]
pub struct CapabilitiesProps {
    pub on_navigate: Callback<()>,
}

#[function_component(Capabilities)]
pub fn capabilities(props: &CapabilitiesProps) -> Html {
    let onclick = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(()))
    };

    html! {
        <section id="capabilities" class="capabilities-section">
            <div class="section-heading">
                <p class="eyebrow">{"Our Expertise"}</p>
                <h2>{"關鍵優勢"}</h2>
            </div>
            <div class="capability-list">
                { for CAPABILITIES.iter().enumerate().map(|(idx, capability)| html! {
                    <div class="capability-card" key={capability.title}>
                        <div class="capability-badge">{ format!("0{}", idx + 1) }</div>
                        <div class="capability-text">
                            <h3>{ capability.title }</h3>
                            <p>{ capability.description }</p>
                        </div>
                    </div>
                }) }
            </div>
            <div class="section-cta">
                <button class="cta-button" {onclick}>{"客製化洞察服務"}</button>
            </div>
        </section>
    }
}
