//! Server-rendered HTML for the browser page.

use data_loader::OriginFilter;
use pipeline::{GENRES, ORIGIN_CHOICES};

use crate::card::MovieCard;

/// Cards per row in the result grid
const CARDS_PER_ROW: usize = 5;

const STYLE: &str = r#"
body {
    margin: 0;
    padding: 24px 48px;
    background-color: #141414;
    color: #FAFAFA;
    font-family: 'Helvetica Neue', Helvetica, Arial, sans-serif;
}
h1 {
    color: #E50914;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 2px;
}
h3 { color: #FFFFFF; font-weight: 700; }
nav a {
    display: inline-block;
    padding: 8px 16px;
    color: #B3B3B3;
    text-decoration: none;
    border-bottom: 2px solid transparent;
}
nav a.active { color: #FFFFFF; border-bottom-color: #E50914; }
form { margin: 16px 0; }
label { display: block; margin: 8px 0 4px; }
input, select {
    padding: 8px;
    min-width: 320px;
    background: #333333;
    color: #FAFAFA;
    border: 1px solid #555555;
    border-radius: 4px;
}
button {
    margin-top: 12px;
    background-color: #E50914;
    color: #FFFFFF;
    border: none;
    border-radius: 5px;
    font-weight: bold;
    padding: 10px 24px;
    cursor: pointer;
    transition: all 0.2s;
}
button:hover { background-color: #F40612; transform: scale(1.05); }
.row {
    display: grid;
    grid-template-columns: repeat(5, 1fr);
    gap: 16px;
    margin-bottom: 24px;
}
.card img {
    width: 100%;
    border-radius: 8px;
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}
.card img:hover {
    transform: scale(1.05);
    box-shadow: 0 0 25px rgba(229, 9, 20, 0.7);
}
.caption { font-weight: bold; text-align: center; }
details { font-size: 0.9em; color: #D0D0D0; }
summary { cursor: pointer; }
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Movie,
    Genre,
}

impl Tab {
    /// Anything other than `genre` opens the movie tab
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            Some(p) if p.eq_ignore_ascii_case("genre") => Tab::Genre,
            _ => Tab::Movie,
        }
    }
}

/// Everything the page needs to render
pub struct PageView<'a> {
    pub tab: Tab,
    pub title: Option<String>,
    pub genre: Option<String>,
    pub origin: OriginFilter,
    pub titles: Vec<&'a str>,
    /// `None` until a form has been submitted
    pub results: Option<Vec<MovieCard>>,
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render(view: &PageView<'_>) -> String {
    let mut html = String::with_capacity(16 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n<title>MojFlix</title>\n");
    html.push_str(&format!("<style>{}</style>\n", STYLE));
    html.push_str("</head>\n<body>\n<h1>MojFlix</h1>\n");

    html.push_str(&nav(view.tab));
    match view.tab {
        Tab::Movie => html.push_str(&movie_form(view)),
        Tab::Genre => html.push_str(&genre_form(view)),
    }

    if let Some(results) = &view.results {
        html.push_str(&results_section(view, results));
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn nav(active: Tab) -> String {
    let link = |tab: Tab, href: &str, label: &str| {
        let class = if tab == active { " class=\"active\"" } else { "" };
        format!("<a href=\"{}\"{}>{}</a>", href, class, label)
    };
    format!(
        "<nav>{}{}</nav>\n",
        link(Tab::Movie, "/?tab=movie", "Recommend by Movie"),
        link(Tab::Genre, "/?tab=genre", "Browse by Genre"),
    )
}

fn origin_select(selected: &OriginFilter) -> String {
    let options: String = ORIGIN_CHOICES
        .iter()
        .map(|choice| {
            let marker = if OriginFilter::from(*choice) == *selected {
                " selected"
            } else {
                ""
            };
            format!("<option{}>{}</option>", marker, choice)
        })
        .collect();
    format!(
        "<label for=\"origin\">Filter by:</label>\n<select id=\"origin\" name=\"origin\">{}</select>\n",
        options
    )
}

fn movie_form(view: &PageView<'_>) -> String {
    let options: String = view
        .titles
        .iter()
        .map(|title| format!("<option value=\"{}\">", escape_html(title)))
        .collect();
    let value = escape_html(view.title.as_deref().unwrap_or(""));

    format!(
        "<form method=\"get\" action=\"/\">\n\
         <input type=\"hidden\" name=\"tab\" value=\"movie\">\n\
         {}\
         <label for=\"title\">Type or select a movie to get recommendations:</label>\n\
         <input id=\"title\" name=\"title\" list=\"titles\" value=\"{}\" autocomplete=\"off\">\n\
         <datalist id=\"titles\">{}</datalist>\n\
         <button type=\"submit\">Recommend</button>\n\
         </form>\n",
        origin_select(&view.origin),
        value,
        options
    )
}

fn genre_form(view: &PageView<'_>) -> String {
    let options: String = GENRES
        .iter()
        .map(|genre| {
            let marker = if view.genre.as_deref() == Some(*genre) {
                " selected"
            } else {
                ""
            };
            format!("<option{}>{}</option>", marker, genre)
        })
        .collect();

    format!(
        "<form method=\"get\" action=\"/\">\n\
         <input type=\"hidden\" name=\"tab\" value=\"genre\">\n\
         {}\
         <label for=\"genre\">Select a genre to browse:</label>\n\
         <select id=\"genre\" name=\"genre\">{}</select>\n\
         <button type=\"submit\">Show Movies</button>\n\
         </form>\n",
        origin_select(&view.origin),
        options
    )
}

fn results_section(view: &PageView<'_>, results: &[MovieCard]) -> String {
    let (heading, empty) = match view.tab {
        Tab::Movie => (
            format!("<h3>{}</h3>", escape_html(view.title.as_deref().unwrap_or(""))),
            "No recommendations found.".to_string(),
        ),
        Tab::Genre => {
            let genre = escape_html(view.genre.as_deref().unwrap_or(""));
            (
                format!("<h3>Top {} Movies ({})</h3>", genre, escape_html(view.origin.label())),
                format!("No {} movies found.", genre),
            )
        }
    };

    if results.is_empty() {
        return format!("<section>\n<p class=\"empty\">{}</p>\n</section>\n", empty);
    }

    let rows: String = results
        .chunks(CARDS_PER_ROW)
        .map(|row| {
            let cards: String = row.iter().map(card).collect();
            format!("<div class=\"row\">\n{}</div>\n", cards)
        })
        .collect();

    format!("<section>\n{}\n{}</section>\n", heading, rows)
}

fn card(card: &MovieCard) -> String {
    format!(
        "<div class=\"card\">\n\
         <img src=\"{}\" alt=\"{}\">\n\
         <p class=\"caption\">{}</p>\n\
         <details><summary>More Info</summary>\n\
         <p><strong>Description:</strong> {}</p>\n\
         <p><strong>Cast:</strong> {}</p>\n\
         <p><strong>Director:</strong> {}</p>\n\
         </details>\n\
         </div>\n",
        escape_html(&card.poster_url),
        escape_html(&card.title),
        escape_html(&card.caption()),
        escape_html(&card.description),
        escape_html(&card.cast),
        escape_html(&card.director),
    )
}
