use folio_core::skills::{group_by_category, Skill, SKILLS};
use yew::prelude::*;

fn skill_chip(skill: &Skill) -> Html {
    let icon = match skill.icon_class() {
        Some(class) => html! {
            <>
                <i class={class} aria-hidden="true"></i>
                <span class="skill-chip-icon-fallback" aria-hidden="true">
                    {skill.fallback_initial()}
                </span>
            </>
        },
        None => html! {},
    };
    let content = html! {
        <>
            {icon}
            <span class="skill-chip-label">{skill.label}</span>
        </>
    };
    match skill.url {
        Some(url) => html! {
            <li>
                <a
                    href={url}
                    class={skill.chip_class()}
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label={skill.link_label()}
                >
                    {content}
                </a>
            </li>
        },
        None => html! {
            <li>
                <div class={skill.chip_class()} role="listitem" aria-label={skill.label}>
                    {content}
                </div>
            </li>
        },
    }
}

#[function_component(SkillsSection)]
pub(crate) fn skills_section() -> Html {
    let categories: Html = group_by_category(SKILLS)
        .into_iter()
        .map(|(category, skills)| {
            html! {
                <div class="skills-category" data-category={category.title()}>
                    <h3 class="skills-category-title">{category.title()}</h3>
                    <ul class="skills-grid" role="list">
                        {for skills.into_iter().map(skill_chip)}
                    </ul>
                </div>
            }
        })
        .collect();
    html! {
        <div class="container">
            <h2>{"Skills"}</h2>
            <div class="skills-container">
                {categories}
            </div>
        </div>
    }
}
