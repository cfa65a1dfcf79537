// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Facade behaviour against an in-memory stand-in for the web app

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::{Method, StatusCode};

use bdfd_external::{
    BotSummary, Client, ClientConfig, Command, CommandChanges, ErrorKind, Language, LanguageInfo,
    Request, Response, Result, SessionToken, Transport, Variable, VariableChanges,
};

const BOT_ID: &str = "42";
const GOOD_TOKEN: &str = "good";

/// Serves the app's pages from a mutable store and records every request
struct FakeSite {
    state: Mutex<State>,
    sent: Mutex<Vec<Request>>,
    forced: Mutex<Vec<(Method, String, u16)>>,
}

struct State {
    username: String,
    commands: BTreeMap<String, Command>,
    variables: BTreeMap<String, Variable>,
    next_id: u64,
}

impl FakeSite {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(State {
                username: "nicky".into(),
                commands: BTreeMap::new(),
                variables: BTreeMap::new(),
                next_id: 100,
            }),
            sent: Mutex::new(Vec::new()),
            forced: Mutex::new(Vec::new()),
        })
    }

    fn add_command(&self, id: &str, name: &str, trigger: &str, code: &str, language: Language) {
        self.state.lock().commands.insert(
            id.into(),
            Command {
                id: id.into(),
                name: name.into(),
                trigger: trigger.into(),
                code: code.into(),
                language: language.into(),
            },
        );
    }

    fn add_variable(&self, id: &str, name: &str, value: &str) {
        self.state.lock().variables.insert(
            id.into(),
            Variable {
                id: id.into(),
                name: name.into(),
                value: value.into(),
            },
        );
    }

    /// Answer `method` on `path` with `status` from now on
    fn force(&self, method: Method, path: &str, status: u16) {
        self.forced.lock().push((method, path.into(), status));
    }

    fn requests(&self) -> Vec<(Method, String)> {
        self.sent
            .lock()
            .iter()
            .map(|r| (r.method.clone(), r.url.path().to_string()))
            .collect()
    }

    fn last_form(&self) -> Vec<(String, String)> {
        self.sent
            .lock()
            .iter()
            .rev()
            .find(|r| r.method == Method::POST)
            .map(|r| r.form_fields())
            .unwrap_or_default()
    }

    fn command(&self, id: &str) -> Option<Command> {
        self.state.lock().commands.get(id).cloned()
    }

    fn route(&self, request: &Request) -> (u16, String) {
        if request.header_value("cookie") != Some("default-sessionStore=good") {
            return (302, "<a href=\"/login\">Found</a>".into());
        }

        let path = request.url.path().to_string();
        let forced = self
            .forced
            .lock()
            .iter()
            .find(|(m, p, _)| *m == request.method && *p == path)
            .map(|(_, _, status)| *status);
        if let Some(status) = forced {
            return (status, "<h1>Forced</h1>".into());
        }

        let segments: Vec<&str> = path.trim_start_matches("/app/").split('/').collect();
        let mut state = self.state.lock();

        match (request.method.as_str(), segments.as_slice()) {
            ("GET", ["home"]) => (200, home_page(&state)),
            (_, ["bot", bot, ..]) if *bot != BOT_ID => (404, "<h1>Not found</h1>".into()),
            ("GET", ["bot", _]) => (200, dashboard_page(&state)),
            ("GET", ["bot", _, "new_command"]) => {
                let id = state.allocate();
                state.commands.insert(
                    id.clone(),
                    Command {
                        id: id.clone(),
                        name: String::new(),
                        trigger: String::new(),
                        code: String::new(),
                        language: Language::BdScript2.into(),
                    },
                );
                (200, link_page(&format!("/app/bot/{}/command/{}", BOT_ID, id)))
            }
            ("GET", ["bot", _, "new_variable"]) => {
                let id = state.allocate();
                state.variables.insert(
                    id.clone(),
                    Variable {
                        id: id.clone(),
                        name: String::new(),
                        value: String::new(),
                    },
                );
                (200, link_page(&format!("/app/bot/{}/variable/{}", BOT_ID, id)))
            }
            (method, ["bot", _, "command", id]) => {
                let id = id.to_string();
                if !state.commands.contains_key(&id) {
                    return (404, "<h1>Not found</h1>".into());
                }
                match method {
                    "GET" => (200, command_page(&state.commands[&id])),
                    "POST" => {
                        let form = request.form_fields();
                        let field = |name: &str| {
                            form.iter()
                                .find(|(k, _)| k == name)
                                .map(|(_, v)| v.clone())
                                .unwrap_or_default()
                        };
                        let language = Language::from_id(&field("language"))
                            .map(LanguageInfo::from)
                            .unwrap_or_default();
                        state.commands.insert(
                            id.clone(),
                            Command {
                                id,
                                name: field("name"),
                                trigger: field("command"),
                                code: field("replyMessage"),
                                language,
                            },
                        );
                        (303, String::new())
                    }
                    "DELETE" => {
                        state.commands.remove(&id);
                        (200, String::new())
                    }
                    _ => (400, String::new()),
                }
            }
            (method, ["bot", _, "variable", id]) => {
                let id = id.to_string();
                if !state.variables.contains_key(&id) {
                    return (404, "<h1>Not found</h1>".into());
                }
                match method {
                    "GET" => (200, variable_page(&state.variables[&id])),
                    "POST" => {
                        let form = request.form_fields();
                        let field = |name: &str| {
                            form.iter()
                                .find(|(k, _)| k == name)
                                .map(|(_, v)| v.clone())
                                .unwrap_or_default()
                        };
                        state.variables.insert(
                            id.clone(),
                            Variable {
                                id,
                                name: field("name"),
                                value: field("value"),
                            },
                        );
                        (303, String::new())
                    }
                    "DELETE" => {
                        state.variables.remove(&id);
                        (200, String::new())
                    }
                    _ => (400, String::new()),
                }
            }
            _ => (404, "<h1>Not found</h1>".into()),
        }
    }
}

impl State {
    fn allocate(&mut self) -> String {
        self.next_id += 1;
        self.next_id.to_string()
    }
}

#[async_trait]
impl Transport for FakeSite {
    async fn send(&self, request: &Request) -> Result<Response> {
        self.sent.lock().push(request.clone());
        let (status, body) = self.route(request);
        Ok(Response::html(
            StatusCode::from_u16(status).unwrap(),
            request.url.clone(),
            body,
        ))
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn home_page(state: &State) -> String {
    format!(
        concat!(
            "<html><body>",
            "<h2 class=\"uk-heading-divider\"><span>{}</span></h2>",
            "<a class=\"botCard uk-card\" href=\"/app/bot/{}\">",
            "<h3 class=\"uk-card-title\">Helper</h3>",
            "<p>\n\t\tHosting\n\t\tHosting already ended\n\t\tCommands\n\t\tVariables\n\t\t{}\n\t\t{}\n</p>",
            "</a></body></html>"
        ),
        escape(&state.username),
        BOT_ID,
        state.commands.len(),
        state.variables.len()
    )
}

fn dashboard_page(state: &State) -> String {
    let card = |id: &str, kind: &str, first: &str, second: &str| {
        format!(
            "<div class=\"commandCard\"><div class=\"commandDetails\"><b>{}</b><span>{}</span></div>\
             <div class=\"commandControls\"><a href=\"/app/bot/{}/{}/{}\">Edit</a></div></div>",
            escape(first),
            escape(second),
            BOT_ID,
            kind,
            id
        )
    };

    let commands: String = state
        .commands
        .values()
        .map(|c| card(&c.id, "command", &c.name, &c.trigger))
        .collect();
    let variables: String = state
        .variables
        .values()
        .map(|v| card(&v.id, "variable", &v.name, &format!("$getVar[{}]={}", v.name, v.value)))
        .collect();

    format!(
        "<html><body><div id=\"bot-switcher\"><div>tabs</div><div>{}</div><div>{}</div></div></body></html>",
        commands, variables
    )
}

fn command_page(command: &Command) -> String {
    let options: String = Language::ALL
        .iter()
        .map(|lang| {
            let selected = if lang.id() == command.language.id { " selected" } else { "" };
            format!("<option value=\"{}\"{}>{}</option>", lang.id(), selected, lang.name())
        })
        .collect();

    format!(
        "<html><body><form>\
         <div class=\"uk-margin\"><input class=\"uk-input\" value=\"{}\"></div>\
         <div class=\"uk-margin\"><input class=\"uk-input\" value=\"{}\"></div>\
         <div class=\"uk-margin\"><textarea class=\"uk-textarea\">{}</textarea></div>\
         <div class=\"uk-margin\"><select class=\"uk-select\">{}</select></div>\
         </form></body></html>",
        escape(&command.name),
        escape(&command.trigger),
        escape(&command.code),
        options
    )
}

fn variable_page(variable: &Variable) -> String {
    format!(
        "<html><body><form>\
         <div class=\"uk-margin\"><input class=\"uk-input\" value=\"{}\"></div>\
         <div class=\"uk-margin\"><input class=\"uk-input\" value=\"{}\"></div>\
         </form></body></html>",
        escape(&variable.name),
        escape(&variable.value)
    )
}

fn link_page(href: &str) -> String {
    format!("<html><body><a href=\"{}\">Redirecting</a></body></html>", href)
}

fn client(site: &Arc<FakeSite>) -> Client<Arc<FakeSite>> {
    Client::with_transport(site.clone(), ClientConfig::default()).unwrap()
}

fn token() -> SessionToken {
    SessionToken::new(GOOD_TOKEN)
}

fn path(kind: &str, id: &str) -> String {
    format!("/app/bot/{}/{}/{}", BOT_ID, kind, id)
}

#[tokio::test]
async fn test_user_get() {
    let site = FakeSite::new();
    assert_eq!(client(&site).user().get(&token()).await.unwrap(), "nicky");
}

#[tokio::test]
async fn test_bad_session_is_auth_token_error() {
    let site = FakeSite::new();

    let err = client(&site)
        .user()
        .get(&SessionToken::new("expired"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::AuthToken));
    assert_eq!(err.status_code(), Some(302));
    assert_eq!(site.requests().len(), 1);
}

#[tokio::test]
async fn test_bots_list_and_get() {
    let site = FakeSite::new();
    site.add_command("7", "ping", "!ping", "Pong", Language::BdScript2);
    let client = client(&site);

    let bots = client.bots().list(&token()).await.unwrap();
    assert_eq!(
        bots,
        vec![BotSummary {
            id: BOT_ID.into(),
            name: "Helper".into(),
            hosting: "Hosting already ended".into(),
            command_count: "1".into(),
            variable_count: "0".into(),
        }]
    );

    assert_eq!(client.bots().get(&token(), BOT_ID).await.unwrap(), Some(bots[0].clone()));
    assert_eq!(client.bots().get(&token(), "999").await.unwrap(), None);
}

#[tokio::test]
async fn test_lists() {
    let site = FakeSite::new();
    site.add_command("7", "ping", "!ping", "Pong", Language::BdScript2);
    site.add_command("8", "help", "!help", "Help", Language::BdScript);
    site.add_variable("3", "counter", "10");
    let client = client(&site);

    let commands = client.commands().list(&token(), BOT_ID).await.unwrap();
    let names: Vec<_> = commands.iter().map(|c| (c.id.as_str(), c.trigger.as_str())).collect();
    assert_eq!(names, vec![("7", "!ping"), ("8", "!help")]);

    let variables = client.variables().list(&token(), BOT_ID).await.unwrap();
    assert_eq!(variables.len(), 1);
    assert_eq!(variables[0].name, "counter");
    assert_eq!(variables[0].value, "10");

    let err = client.commands().list(&token(), "999").await.unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::General));
}

#[tokio::test]
async fn test_command_update_returns_previous_state() {
    let site = FakeSite::new();
    site.add_command("7", "Old", "!old", "code", Language::BdScript);
    let client = client(&site);

    let returned = client
        .commands()
        .update(&token(), BOT_ID, "7", CommandChanges::new().name("New"))
        .await
        .unwrap();

    assert_eq!(returned.name, "Old");
    assert_eq!(returned.language.name, "BDScript");

    let current = client.commands().get(&token(), BOT_ID, "7").await.unwrap();
    assert_eq!(current.name, "New");
    assert_eq!(current.trigger, "!old");
    assert_eq!(current.code, "code");
    // omitted language keeps the previous id
    assert_eq!(current.language.id, "0");
}

#[tokio::test]
async fn test_command_update_form_body() {
    let site = FakeSite::new();
    site.add_command("7", "ping", "!ping", "Pong", Language::BdScript2);

    client(&site)
        .commands()
        .update(
            &token(),
            BOT_ID,
            "7",
            CommandChanges::new()
                .code("$nomention\nPong & more")
                .language_name("Javascript (ES5+BD.js)"),
        )
        .await
        .unwrap();

    let form = site.last_form();
    let expected: Vec<(String, String)> = [
        ("name", "ping"),
        ("command", "!ping"),
        ("replyMessage", "$nomention\nPong & more"),
        ("language", "1"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    assert_eq!(form, expected);
}

#[tokio::test]
async fn test_update_stops_when_prefetch_fails() {
    let site = FakeSite::new();
    let client = client(&site);

    let err = client
        .commands()
        .update(&token(), BOT_ID, "404", CommandChanges::new().name("x"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::General));
    assert_eq!(site.requests(), vec![(Method::GET, path("command", "404"))]);
}

#[tokio::test]
async fn test_command_create_defaults() {
    let site = FakeSite::new();
    let client = client(&site);

    let created = client
        .commands()
        .create(&token(), BOT_ID, CommandChanges::default())
        .await
        .unwrap();

    assert_eq!(created.id, "101");
    assert_eq!(created.name, "Unnamed command");
    assert_eq!(created.trigger, "");
    assert_eq!(created.code, "");
    assert_eq!(
        created.language,
        LanguageInfo {
            id: "3".into(),
            name: "BDScript 2".into(),
        }
    );

    assert_eq!(
        site.requests(),
        vec![
            (Method::GET, format!("/app/bot/{}/new_command", BOT_ID)),
            (Method::GET, path("command", "101")),
            (Method::POST, path("command", "101")),
        ]
    );
    assert_eq!(site.command("101"), Some(created));
}

#[tokio::test]
async fn test_command_create_language_by_name() {
    let site = FakeSite::new();
    let client = client(&site);

    let known = client
        .commands()
        .create(&token(), BOT_ID, CommandChanges::new().name("a").language_name("BDScript"))
        .await
        .unwrap();
    assert_eq!(known.language.id, "0");
    assert_eq!(site.command(&known.id).unwrap().language.id, "0");

    let unknown = client
        .commands()
        .create(&token(), BOT_ID, CommandChanges::new().language_name("bdscript"))
        .await
        .unwrap();
    assert_eq!(unknown.language.id, "3");
    assert_eq!(unknown.language.name, "BDScript 2");
}

// The created record is assembled locally: a server that accepts the fill-in
// update without storing it still yields the requested values.
#[tokio::test]
async fn test_command_create_is_not_read_back() {
    let site = FakeSite::new();
    site.force(Method::POST, &path("command", "101"), 200);
    let client = client(&site);

    let created = client
        .commands()
        .create(&token(), BOT_ID, CommandChanges::new().name("ping"))
        .await
        .unwrap();

    assert_eq!(created.name, "ping");
    assert_eq!(site.command("101").unwrap().name, "");
}

#[tokio::test]
async fn test_command_create_limit() {
    let site = FakeSite::new();
    site.force(Method::GET, &format!("/app/bot/{}/new_command", BOT_ID), 403);

    let err = client(&site)
        .commands()
        .create(&token(), BOT_ID, CommandChanges::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::Limit));
    assert_eq!(site.requests().len(), 1);
}

#[tokio::test]
async fn test_command_delete() {
    let site = FakeSite::new();
    site.add_command("7", "ping", "!ping", "Pong", Language::BdScript2);
    let client = client(&site);

    let deleted = client.commands().delete(&token(), BOT_ID, "7").await.unwrap();

    assert_eq!(deleted.name, "ping");
    assert!(site.command("7").is_none());
}

#[tokio::test]
async fn test_variable_create_defaults() {
    let site = FakeSite::new();
    let client = client(&site);

    let created = client
        .variables()
        .create(&token(), BOT_ID, VariableChanges::default())
        .await
        .unwrap();

    assert_eq!(
        created,
        Variable {
            id: "101".into(),
            name: "Unnamed variable".into(),
            value: "".into(),
        }
    );
    assert_eq!(client.variables().get(&token(), BOT_ID, "101").await.unwrap(), created);
}

#[tokio::test]
async fn test_variable_update_returns_previous_state() {
    let site = FakeSite::new();
    site.add_variable("7", "counter", "10");
    let client = client(&site);

    let returned = client
        .variables()
        .update(&token(), BOT_ID, "7", VariableChanges::new().value("11"))
        .await
        .unwrap();

    assert_eq!(returned.value, "10");
    let current = client.variables().get(&token(), BOT_ID, "7").await.unwrap();
    assert_eq!(current.name, "counter");
    assert_eq!(current.value, "11");
}

#[tokio::test]
async fn test_variable_delete_returns_snapshot() {
    let site = FakeSite::new();
    site.add_variable("7", "counter", "10");
    let client = client(&site);

    let deleted = client.variables().delete(&token(), BOT_ID, "7").await.unwrap();

    assert_eq!(deleted.name, "counter");
    assert_eq!(deleted.value, "10");

    let err = client.variables().get(&token(), BOT_ID, "7").await.unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::General));
}

#[tokio::test]
async fn test_variable_delete_rejected() {
    let site = FakeSite::new();
    site.add_variable("7", "counter", "10");
    site.force(Method::DELETE, &path("variable", "7"), 404);

    let err = client(&site)
        .variables()
        .delete(&token(), BOT_ID, "7")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::General));
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(
        site.requests(),
        vec![
            (Method::GET, path("variable", "7")),
            (Method::DELETE, path("variable", "7")),
        ]
    );
}

#[tokio::test]
async fn test_futures_are_send() {
    let site = FakeSite::new();
    site.add_variable("7", "counter", "10");
    let client = Arc::new(client(&site));

    let handle = tokio::spawn({
        let client = client.clone();
        async move { client.variables().get(&token(), BOT_ID, "7").await }
    });

    assert_eq!(handle.await.unwrap().unwrap().value, "10");
}
