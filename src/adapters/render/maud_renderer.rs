//! Maud-based renderer for the trend details widget.
//!
//! Class names follow the Basscss utility classes used by the surrounding
//! page; ids come straight from the view model.

use maud::{html, Markup};

use crate::domain::trends::{
    GlossaryTerm, NationalComparison, SentenceView, TrendDetailsView, TrendRowView,
    YearSelectView, SELECTED_YEAR_TEXT_ID,
};
use crate::ports::TrendDetailsRenderer;

const BORDER_COLOR: &str = "border-color: #c8d3dd";
const CELL_STYLE: &str = "width: 68px; border-color: #c8d3dd";

/// Renders trend details as an HTML fragment.
#[derive(Debug, Clone, Default)]
pub struct MaudTrendDetailsRenderer;

impl MaudTrendDetailsRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn markup(&self, view: &TrendDetailsView) -> Markup {
        html! {
            div class="mb3 sm-mb5 lg-flex trend-chart-details" {
                div class="flex-auto" {
                    p class="mb2 lg-m0 lg-pr5 lg-mh-88p fs-14" {
                        (sentence(&view.sentence))
                    }
                }
                div id=(view.container_id)
                    class="flex-none inline-block mw-fill overflow-auto bg-blue-white rounded" {
                    table class="p2 sm-col-5" {
                        thead class="fs-10 line-height-4 right-align" {
                            tr {
                                td class="left-align" { (year_select(&view.year_select)) }
                                td class="pr2 align-middle" { "Rate" }
                                td class="pr2 align-middle" { "Total" }
                                td class="pl2 align-middle border-left" style=(BORDER_COLOR) {
                                    "Population"
                                }
                            }
                        }
                        tbody class="fs-12 bold line-height-4" {
                            @for row in &view.rows {
                                (table_row(row))
                            }
                        }
                    }
                }
            }
        }
    }
}

impl TrendDetailsRenderer for MaudTrendDetailsRenderer {
    fn render(&self, view: &TrendDetailsView) -> String {
        self.markup(view).into_string()
    }
}

fn highlight(text: impl maud::Render) -> Markup {
    html! { strong { (text) } }
}

fn term(term: &GlossaryTerm) -> Markup {
    html! {
        button type="button" class="bold border-bottom btn-link fs-12 glossary-term"
            data-term=(term.id) {
            (term.label)
        }
    }
}

fn comparison(comparison: &NationalComparison) -> Markup {
    match comparison {
        NationalComparison::AboutTheSame { threshold } => html! {
            span { "about the same (within " (threshold) "%) as" }
        },
        other => html! {
            span {
                span class="bold highlight" { (other.direction().unwrap_or_default()) }
                " than"
            }
        },
    }
}

fn sentence(sentence: &SentenceView) -> Markup {
    match sentence {
        SentenceView::National { year, rate, term: t } => html! {
            span {
                "In " (highlight(year)) ", there were " (highlight(rate))
                " incidents of " (term(t)) " per 100,000 people."
            }
        },
        SentenceView::RapeDual {
            year,
            legacy_rate,
            revised_rate,
            legacy_term,
            revised_term,
        } => html! {
            span {
                "In " (highlight(year)) ", the rate at which rape was reported using the "
                (term(legacy_term)) " definition was " (highlight(legacy_rate))
                " per 100,000. Rape was reported using the " (term(revised_term))
                " definition at a rate of " (highlight(revised_rate)) " per 100,000 people."
            }
        },
        SentenceView::Default {
            year,
            place_name,
            rate,
            term: t,
            comparison: c,
        } => html! {
            span {
                "In " span id=(SELECTED_YEAR_TEXT_ID) { (highlight(year)) } ", "
                (place_name) "’s " (term(t)) " rate was " (highlight(rate))
                " incidents per 100,000 people. The rate for that year was "
                (comparison(c)) " that of the United States."
            }
        },
        SentenceView::NoData {
            place_name,
            year,
            term: t,
        } => html! {
            span class="no-data" {
                "No " (term(t)) " data is available for " (place_name)
                " in " (highlight(year)) "."
            }
        },
    }
}

fn year_select(select: &YearSelectView) -> Markup {
    html! {
        label for=(select.id) class="hide" { (select.label) }
        select class="col-12 field select select-sm select-dark fs-12"
            id=(select.id) name="year" style="width: 100px" {
            @for year in &select.options {
                option value=(year) selected[select.selected == *year] { (year) }
            }
        }
    }
}

fn table_row(row: &TrendRowView) -> Markup {
    html! {
        tr id=(row.row_id) {
            td class="pr2 nowrap truncate align-bottom" style="max-width: 125px" {
                span class="mr1 inline-block circle"
                    style=(format!("width: 8px; height: 8px; background-color: {}", row.color)) {}
                (row.display_name)
            }
            td class="pt1 pr2 align-bottom right-align" {
                span id=(row.rate.id) class="inline-block border-bottom" style=(CELL_STYLE) {
                    (row.rate.text)
                }
            }
            td class="pt1 pr2 align-bottom right-align" {
                span id=(row.count.id) class="inline-block border-bottom" style=(CELL_STYLE) {
                    (row.count.text)
                }
            }
            td class="pt1 pl2 align-bottom right-align border-left" style=(BORDER_COLOR) {
                span id=(row.population.id) class="inline-block border-bottom" style=(CELL_STYLE) {
                    (row.population.text)
                }
            }
        }
    }
}
