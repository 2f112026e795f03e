//! Landing page component
//!
//! The single PlantGift marketing page:
//! - SEO meta tags
//! - Hero with floating leaves and the animated plant
//! - Plant catalogue with load-more
//! - Features, services and the gifting modal
//! - Impact counters, progress bars and the animated tree
//! - Testimonials, team, plant care tabs and FAQ accordion
//! - Bulk order and contact forms, footer with newsletter signup
//!
//! The effect controllers attach to the page root once it is mounted.

use leptos::html;
use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::forms::FormKind;
use crate::ui::common::{Accordion, AccordionItem, Modal, TabItem, Tabs, Tooltip};
use crate::ui::effects::{use_animation_controller, use_page_lifecycle, use_scroll_controller};
use crate::ui::forms::{NewsletterForm, SiteForm};
use crate::ui::helpers::use_site_helpers;
use crate::ui::icon::{Icon, icons};
use crate::ui::navigation::{NAV_LINKS, NavBar, ScrollProgress, ScrollToTop};

/// Landing page component with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    let helpers = use_site_helpers();
    let settings = helpers.settings();
    let root = NodeRef::<html::Div>::new();
    let gift_modal = RwSignal::new(false);

    use_page_lifecycle(root, settings.clone());
    use_animation_controller(root, settings.clone());
    use_scroll_controller(root, settings, helpers);

    view! {
        <SeoMeta site_name=helpers.site_name()/>

        <div class="site" node_ref=root>
            <ScrollProgress/>
            <NavBar/>

            <main>
                <Hero/>
                <PlantsSection/>
                <FeaturesSection on_gift=Callback::new(move |_: ()| gift_modal.set(true))/>
                <ServicesSection/>
                <ImpactSection/>
                <TestimonialsSection/>
                <CareSection/>
                <FaqSection/>
                <BulkOrderSection/>
                <ContactSection/>
                <CtaSection on_gift=Callback::new(move |_: ()| gift_modal.set(true))/>
            </main>

            <Footer/>
            <ScrollToTop/>

            <Modal
                id="gift-modal"
                title="Send a Plant Gift".to_string()
                subtitle="We deliver Monday through Saturday".to_string()
                is_open=gift_modal
            >
                <SiteForm kind=FormKind::Gift modal=gift_modal/>
            </Modal>
        </div>
    }
}

#[component]
fn SeoMeta(site_name: String) -> impl IntoView {
    let title = format!("{site_name} - Plants That Grow Relationships");

    view! {
        <Title text=title.clone()/>
        <Meta
            name="description"
            content="Gift living plants to the people you care about. Bulk greening for offices, schools and communities."
        />
        <Meta property="og:type" content="website"/>
        <Meta property="og:title" content=title/>
        <Meta
            property="og:description"
            content="Gift living plants, delivered with care."
        />
    }
}

#[component]
fn SectionHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2>{title}</h2>
            <p>{subtitle}</p>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let helpers = use_site_helpers();

    view! {
        <section id="home" class="hero">
            <div class="hero-background" aria-hidden="true"></div>
            <div class="floating-leaves" aria-hidden="true">
                <span class="leaf">"🍃"</span>
                <span class="leaf">"🌿"</span>
                <span class="leaf">"🍀"</span>
            </div>

            <div class="hero-container">
                <div class="hero-content">
                    <h1 class="hero-title">"Plants That Grow Relationships"</h1>
                    <p class="hero-subtitle">
                        "Send a living gift that keeps growing long after the card is gone."
                    </p>
                    <div class="hero-buttons">
                        <button
                            class="btn btn-primary"
                            on:click=move |_| {
                                helpers.smooth_scroll_to("plants");
                            }
                        >
                            "Browse Plants"
                        </button>
                        <a href="#bulk-order" class="btn btn-secondary">"Bulk Orders"</a>
                    </div>
                    <div class="hero-stats">
                        <div class="stat">
                            <h3>"15,000+"</h3>
                            <p>"Plants gifted"</p>
                        </div>
                        <div class="stat">
                            <h3>"1,200+"</h3>
                            <p>"Happy companies"</p>
                        </div>
                        <div class="stat">
                            <h3>"98%"</h3>
                            <p>"Still thriving"</p>
                        </div>
                    </div>
                </div>

                <div class="hero-visual" aria-hidden="true">
                    <div class="plant-container">
                        <div class="pot"></div>
                        <div class="stem"></div>
                        <div class="leaf-large"></div>
                        <div class="leaf-medium"></div>
                        <div class="leaf-small"></div>
                    </div>
                    <div class="floating-element" data-parallax-speed="0.3">"🌱"</div>
                    <div class="floating-element">"🌸"</div>
                </div>
            </div>
        </section>
    }
}

struct Plant {
    name: &'static str,
    image: &'static str,
    blurb: &'static str,
    price: &'static str,
    care: &'static str,
}

const PLANTS: [Plant; 4] = [
    Plant {
        name: "Monstera Deliciosa",
        image: "/images/monstera.svg",
        blurb: "Bold split leaves for bright rooms.",
        price: "$45",
        care: "Water weekly, bright indirect light",
    },
    Plant {
        name: "Snake Plant",
        image: "/images/snake-plant.svg",
        blurb: "Nearly indestructible and air purifying.",
        price: "$30",
        care: "Water every two weeks, any light",
    },
    Plant {
        name: "Golden Pothos",
        image: "/images/pothos.svg",
        blurb: "Trailing vines that forgive forgetfulness.",
        price: "$25",
        care: "Water when the top inch is dry",
    },
    Plant {
        name: "Fiddle Leaf Fig",
        image: "/images/fiddle-leaf.svg",
        blurb: "A statement tree for sunny corners.",
        price: "$60",
        care: "Water weekly, keep away from drafts",
    },
];

#[component]
fn PlantsSection() -> impl IntoView {
    view! {
        <section id="plants" class="plants-section">
            <div class="container">
                <SectionHeader
                    title="Our Plants"
                    subtitle="Hand-picked, greenhouse grown and shipped in recyclable packaging"
                />
                <div id="plants-grid" class="plants-grid">
                    {PLANTS
                        .iter()
                        .map(|plant| {
                            view! {
                                <article class="plant-card">
                                    <img src=plant.image alt=plant.name loading="lazy"/>
                                    <div class="card-content">
                                        <h3>{plant.name}</h3>
                                        <p>{plant.blurb}</p>
                                        <div class="card-footer">
                                            <span class="price">{plant.price}</span>
                                            <Tooltip text=plant.care>
                                                <span class="care-hint">"Care"</span>
                                            </Tooltip>
                                        </div>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="load-more-container">
                    <button id="load-more" class="btn btn-secondary">"Load More Plants"</button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeaturesSection(on_gift: Callback<()>) -> impl IntoView {
    let features = [
        (icons::GIFT, "Thoughtful Gifting", "A handwritten card travels with every plant."),
        (icons::TRUCK, "Careful Delivery", "Climate-controlled vans, Monday through Saturday."),
        (icons::LEAF, "Lifetime Care Tips", "Seasonal reminders so every gift keeps thriving."),
    ];

    view! {
        <section id="features" class="features-section">
            <div class="container">
                <SectionHeader title="Why PlantGift" subtitle="More than a bouquet, less work than a puppy"/>
                <div class="features-grid reveal-on-scroll">
                    {features
                        .into_iter()
                        .map(|(icon, title, text)| {
                            view! {
                                <div class="feature-card stagger-child">
                                    <div class="feature-icon">
                                        <Icon name=icon/>
                                    </div>
                                    <h3>{title}</h3>
                                    <p>{text}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="features-cta">
                    <button class="btn btn-primary" on:click=move |_| on_gift.run(())>
                        <Icon name=icons::GIFT/>
                        "Send a Gift"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServicesSection() -> impl IntoView {
    let services = [
        ("🏢", "Office Greening", "Desk plants and living walls for teams of any size."),
        ("🏫", "School Gardens", "Curriculum-friendly growing kits for classrooms."),
        ("🌳", "Community Planting", "Street trees and pocket parks with local volunteers."),
    ];

    view! {
        <section id="services" class="services-section">
            <div class="container">
                <SectionHeader title="Services" subtitle="Greening at every scale"/>
                <div class="services-grid">
                    {services
                        .into_iter()
                        .map(|(icon, title, text)| {
                            view! {
                                <div class="service-card animate-on-scroll">
                                    <div class="service-icon">{icon}</div>
                                    <h3>{title}</h3>
                                    <p>{text}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ImpactSection() -> impl IntoView {
    let goals = [("Trees planted this year", "72"), ("Recycled packaging", "100"), ("Carbon offset goal", "45")];

    view! {
        <section id="impact" class="impact-section parallax" data-parallax-speed="0.1">
            <div class="container">
                <SectionHeader title="Our Impact" subtitle="Every gift plants something bigger"/>
                <div class="impact-content">
                    <div class="impact-stats">
                        <div class="impact-stat">
                            <h3>"50,000+"</h3>
                            <p>"Trees planted"</p>
                        </div>
                        <div class="impact-stat">
                            <h3>"2,500"</h3>
                            <p>"Tons of CO₂ absorbed"</p>
                        </div>
                        <div class="impact-stat">
                            <h3>"340+"</h3>
                            <p>"Community gardens"</p>
                        </div>
                    </div>

                    <div class="impact-progress">
                        {goals
                            .into_iter()
                            .map(|(label, width)| {
                                view! {
                                    <div class="progress-item">
                                        <span>{label}</span>
                                        <div class="progress-bar">
                                            <div class="progress-bar-fill" data-width=width></div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="animated-tree" aria-hidden="true">
                        <div class="tree-trunk"></div>
                        <div class="tree-leaves">
                            <div></div>
                            <div></div>
                            <div></div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialsSection() -> impl IntoView {
    let testimonials = [
        ("The monstera I sent my sister is now taller than her.", "Rosa M."),
        ("Our office feels alive. The team waters them in turns.", "Dev K., Brightside Labs"),
        ("Forty kids, forty seedlings, zero casualties so far.", "Ms. Okafor, Elm Street School"),
    ];
    let team = [
        ("Iris Chen", "Head Grower"),
        ("Tomás Rivera", "Logistics"),
        ("Priya Nair", "Plant Doctor"),
    ];

    view! {
        <section id="testimonials" class="testimonials-section">
            <div class="container">
                <SectionHeader title="Growing Together" subtitle="What people say about their plants"/>
                <div class="testimonials-grid">
                    {testimonials
                        .into_iter()
                        .map(|(quote, author)| {
                            view! {
                                <blockquote class="testimonial-card">
                                    <p>{quote}</p>
                                    <cite>{author}</cite>
                                </blockquote>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="team-grid">
                    {team
                        .into_iter()
                        .map(|(name, role)| {
                            view! {
                                <div class="team-member">
                                    <div class="team-avatar" aria-hidden="true">"🌿"</div>
                                    <h4>{name}</h4>
                                    <p>{role}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CareSection() -> impl IntoView {
    let tabs = vec![
        TabItem::new("Watering", || {
            view! { <p>"Most houseplants prefer to dry out slightly between waterings. Check the top inch of soil first."</p> }
        }),
        TabItem::new("Light", || {
            view! { <p>"Bright, indirect light suits nearly every plant we ship. Direct afternoon sun can scorch leaves."</p> }
        }),
        TabItem::new("Repotting", || {
            view! { <p>"Repot in spring when roots circle the pot, moving up no more than two inches in diameter."</p> }
        }),
    ];

    view! {
        <section id="care" class="care-section">
            <div class="container reveal-on-scroll">
                <SectionHeader title="Plant Care" subtitle="Keep your gift thriving"/>
                <Tabs tabs=tabs/>
            </div>
        </section>
    }
}

#[component]
fn FaqSection() -> impl IntoView {
    let items = vec![
        AccordionItem::new(
            "When will my gift arrive?",
            "Pick any delivery day from tomorrow up to three months out. We deliver Monday through Saturday.",
        ),
        AccordionItem::new(
            "What if the plant arrives damaged?",
            "Send us a photo within seven days and we will replace it free of charge.",
        ),
        AccordionItem::new(
            "Do you offer bulk pricing?",
            "Yes. Orders of 50 plants or more get tiered pricing. Use the bulk order form below.",
        ),
        AccordionItem::new(
            "Can I include a personal message?",
            "Every gift includes a handwritten card with your message.",
        ),
    ];

    view! {
        <section id="faq" class="faq-section">
            <div class="container">
                <SectionHeader title="Questions" subtitle="Everything you wanted to ask about plant gifting"/>
                <Accordion items=items/>
            </div>
        </section>
    }
}

#[component]
fn BulkOrderSection() -> impl IntoView {
    view! {
        <section id="bulk-order" class="bulk-order-section">
            <div class="container">
                <SectionHeader
                    title="Bulk Orders"
                    subtitle="Offices, schools and communities: tell us what you are planning"
                />
                <div class="form-card reveal-on-scroll">
                    <SiteForm kind=FormKind::BulkOrder/>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="contact-section">
            <div class="container">
                <SectionHeader title="Get in Touch" subtitle="Questions, ideas or plant emergencies"/>
                <div class="contact-content">
                    <div class="contact-info">
                        <p>"hello@plantgift.example"</p>
                        <p>"(555) 010-4477"</p>
                        <p>"Mon to Sat, 8am to 6pm"</p>
                    </div>
                    <div class="form-card">
                        <SiteForm kind=FormKind::Contact/>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CtaSection(on_gift: Callback<()>) -> impl IntoView {
    view! {
        <section class="cta-section">
            <div class="container">
                <h2>"Ready to grow something together?"</h2>
                <p>
                    "Join "
                    <span class="count-up">"1,200+"</span>
                    " companies already gifting with us."
                </p>
                <button class="btn btn-primary" on:click=move |_| on_gift.run(())>
                    "Send a Gift"
                </button>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-content">
                <div class="footer-brand">
                    <Icon name=icons::LEAF/>
                    <span>"PlantGift"</span>
                    <p>"Plants that grow relationships."</p>
                </div>
                <nav class="footer-links" aria-label="Footer">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| view! { <a href=*href>{*label}</a> })
                        .collect_view()}
                </nav>
                <div class="footer-newsletter">
                    <h4>"Seasonal care tips"</h4>
                    <NewsletterForm/>
                </div>
            </div>
            <p class="footer-bottom">"© 2026 PlantGift"</p>
        </footer>
    }
}
