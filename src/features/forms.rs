//! Form Pages
//!
//! Inputs, textarea, select, checkbox, tag input and search bar examples.

use std::time::Duration;

use gpui::{
    div, prelude::*, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled,
    Subscription, Task, Window,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::{
    text_input, Checkbox, SearchBar, Select, SelectChanged, TagInput, TagsChanged, TextInput,
    Textarea, TextareaChanged,
};
use crate::features::section::{caption, page, row, section};
use crate::state::{
    FieldMeta, InputEvent, InputState, InputType, SearchEvent, SearchState, SelectOption,
    SelectState, SelectValue, TagState, TextareaState,
};

fn meta(label: &str) -> FieldMeta {
    FieldMeta {
        label: Some(label.to_string()),
        ..FieldMeta::default()
    }
}

fn describe(value: &SelectValue) -> String {
    match value {
        SelectValue::Single(Some(v)) => format!("Selected: {v}"),
        SelectValue::Single(None) => "Nothing selected".to_string(),
        SelectValue::Multiple(v) if v.is_empty() => "Nothing selected".to_string(),
        SelectValue::Multiple(v) => format!("Selected: {}", v.join(", ")),
    }
}

fn is_valid_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((user, domain)) => !user.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    }
}

pub struct TextInputPage {
    name: Entity<TextInput>,
    email: Entity<TextInput>,
    password: Entity<TextInput>,
    disabled: Entity<TextInput>,
    read_only: Entity<TextInput>,
    submitted: Option<String>,
    _subscriptions: Vec<Subscription>,
}

impl TextInputPage {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let name = cx.new(|cx| {
            TextInput::new(
                "input-name",
                InputState::new("").meta(FieldMeta {
                    placeholder: Some("Jane Doe".to_string()),
                    helper_text: Some("Press Enter to submit".to_string()),
                    required: true,
                    show_clear_button: true,
                    ..meta("Full name")
                }),
                cx,
            )
        });
        let email = cx.new(|cx| {
            TextInput::new(
                "input-email",
                InputState::new("")
                    .input_type(InputType::Email)
                    .meta(FieldMeta {
                        placeholder: Some("you@example.com".to_string()),
                        show_clear_button: true,
                        ..meta("Email")
                    }),
                cx,
            )
        });
        let password = cx.new(|cx| {
            TextInput::new(
                "input-password",
                InputState::new("hunter2")
                    .input_type(InputType::Password)
                    .meta(meta("Password")),
                cx,
            )
        });
        let disabled = text_input(
            "input-disabled",
            InputState::new("Cannot edit").meta(FieldMeta {
                disabled: true,
                ..meta("Disabled")
            }),
            cx,
        );
        let read_only = text_input(
            "input-read-only",
            InputState::new("Read only value").meta(FieldMeta {
                read_only: true,
                show_clear_button: true,
                ..meta("Read only")
            }),
            cx,
        );

        let _subscriptions = vec![
            cx.subscribe(&name, |this, _, event: &InputEvent, cx| {
                if let InputEvent::Submitted(value) = event {
                    this.submitted = Some(value.clone());
                    cx.notify();
                }
            }),
            cx.subscribe(&email, |_this, email, event: &InputEvent, cx| {
                if let InputEvent::Changed(value) = event {
                    let error = (!value.is_empty() && !is_valid_email(value))
                        .then(|| "Enter a valid email address".to_string());
                    email.update(cx, |email, cx| email.set_error(error, cx));
                }
            }),
        ];

        Self {
            name,
            email,
            password,
            disabled,
            read_only,
            submitted: None,
            _subscriptions,
        }
    }
}

impl Render for TextInputPage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        page("Form Input", "Single-line text fields with labels, validation and a clear button.")
            .child(section(
                "Basic",
                div()
                    .w_96()
                    .flex()
                    .flex_col()
                    .gap_4()
                    .child(self.name.clone())
                    .child(self.email.clone())
                    .child(self.password.clone())
                    .when_some(self.submitted.clone(), |el, value| {
                        el.child(caption(format!("Submitted: {value}")))
                    }),
            ))
            .child(section(
                "States",
                div()
                    .w_96()
                    .flex()
                    .flex_col()
                    .gap_4()
                    .child(self.disabled.clone())
                    .child(self.read_only.clone()),
            ))
    }
}

pub struct TextareaPage {
    plain: Entity<Textarea>,
    limited: Entity<Textarea>,
    length: usize,
    _subscriptions: Vec<Subscription>,
}

impl TextareaPage {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let plain = cx.new(|cx| {
            let state = TextareaState {
                meta: FieldMeta {
                    placeholder: Some("Write something...".to_string()),
                    show_clear_button: true,
                    ..meta("Notes")
                },
                ..TextareaState::new("")
            };
            Textarea::new("textarea-notes", state, cx)
        });
        let limited = cx.new(|cx| {
            let state = TextareaState {
                meta: FieldMeta {
                    helper_text: Some("Grows with its content".to_string()),
                    ..meta("Bio")
                },
                min_rows: Some(2),
                max_rows: Some(6),
                auto_resize: true,
                max_length: Some(200),
                show_char_count: true,
                ..TextareaState::new("")
            };
            Textarea::new("textarea-bio", state, cx)
        });

        let _subscriptions = vec![cx.subscribe(&limited, |this, _, event: &TextareaChanged, cx| {
            this.length = event.0.chars().count();
            cx.notify();
        })];

        Self {
            plain,
            limited,
            length: 0,
            _subscriptions,
        }
    }
}

impl Render for TextareaPage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        page("Form Textarea", "Multi-line input with auto-resize and a length limit.")
            .child(section("Basic", div().w_96().child(self.plain.clone())))
            .child(section(
                "Auto-resize with limit",
                div()
                    .w_96()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(self.limited.clone())
                    .child(caption(format!("{} characters", self.length))),
            ))
    }
}

pub struct SelectPage {
    single: Entity<Select>,
    multiple: Entity<Select>,
    grouped: Entity<Select>,
    searchable: Entity<Select>,
    last_change: Option<String>,
    _subscriptions: Vec<Subscription>,
}

impl SelectPage {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let frameworks = || {
            vec![
                SelectOption::new("react", "React"),
                SelectOption::new("vue", "Vue"),
                SelectOption::new("svelte", "Svelte"),
                SelectOption::new("angular", "Angular").disabled(),
                SelectOption::new("gpui", "GPUI"),
            ]
        };
        let produce = vec![
            SelectOption::new("apple", "Apple").group("Fruits"),
            SelectOption::new("banana", "Banana").group("Fruits"),
            SelectOption::new("carrot", "Carrot").group("Vegetables"),
            SelectOption::new("pea", "Pea").group("Vegetables"),
            SelectOption::new("other", "Other"),
        ];
        let countries = [
            "Argentina", "Brazil", "Canada", "Denmark", "Egypt", "France", "Germany", "India",
            "Japan", "Kenya", "Mexico", "Norway",
        ]
        .into_iter()
        .map(|name| SelectOption::new(name.to_lowercase(), name))
        .collect();

        let single = cx.new(|cx| {
            Select::new(
                "select-single",
                SelectState::new(frameworks()).placeholder("Pick a framework"),
                cx,
            )
            .with_meta(FieldMeta {
                required: true,
                ..meta("Framework")
            })
        });
        let multiple = cx.new(|cx| {
            Select::new(
                "select-multiple",
                SelectState::new(frameworks()).multiple(),
                cx,
            )
            .with_meta(meta("Frameworks"))
        });
        let grouped = cx.new(|cx| {
            Select::new("select-grouped", SelectState::new(produce), cx).with_meta(meta("Produce"))
        });
        let searchable = cx.new(|cx| {
            Select::new(
                "select-searchable",
                SelectState::new(countries)
                    .searchable()
                    .placeholder("Search countries"),
                cx,
            )
            .with_meta(FieldMeta {
                helper_text: Some("Type to filter".to_string()),
                ..meta("Country")
            })
        });

        let _subscriptions = [&single, &multiple, &grouped, &searchable]
            .into_iter()
            .map(|select| {
                cx.subscribe(select, |this, _, event: &SelectChanged, cx| {
                    this.last_change = Some(describe(&event.0));
                    cx.notify();
                })
            })
            .collect();

        Self {
            single,
            multiple,
            grouped,
            searchable,
            last_change: None,
            _subscriptions,
        }
    }
}

impl Render for SelectPage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        page("Form Select", "Dropdowns with single or multiple values, groups and search.")
            .child(section(
                "Single and multiple",
                row()
                    .items_start()
                    .child(div().w_64().child(self.single.clone()))
                    .child(div().w_64().child(self.multiple.clone())),
            ))
            .child(section(
                "Grouped and searchable",
                row()
                    .items_start()
                    .child(div().w_64().child(self.grouped.clone()))
                    .child(div().w_64().child(self.searchable.clone())),
            ))
            .when_some(self.last_change.clone(), |el, change| el.child(caption(change)))
    }
}

const CHECKBOX_ITEMS: [&str; 3] = ["Email", "SMS", "Push"];

pub struct CheckboxPage {
    terms: bool,
    channels: [bool; 3],
}

impl CheckboxPage {
    pub fn new() -> Self {
        Self {
            terms: false,
            channels: [true, false, false],
        }
    }
}

impl Render for CheckboxPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // Checkbox reports a plain bool, so updates go through a weak handle
        let view = cx.entity().downgrade();
        let checked = self.channels.iter().filter(|c| **c).count();
        let all = checked == self.channels.len();

        let children: Vec<_> = CHECKBOX_ITEMS.iter().enumerate().map(|(ix, label)| {
            div().pl_6().child(
                Checkbox::new(SharedString::from(format!("channel-{ix}")))
                    .label(*label)
                    .checked(self.channels[ix])
                    .on_change({
                        let view = view.clone();
                        move |checked, _, cx| {
                            let _ = view.update(cx, |this, cx| {
                                this.channels[ix] = checked;
                                cx.notify();
                            });
                        }
                    }),
            )
        })
        .collect();

        page("Checkbox", "Boolean toggles, including a mixed parent state.")
            .child(section(
                "Basic",
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(
                        Checkbox::new("terms")
                            .label("I accept the terms")
                            .checked(self.terms)
                            .on_change({
                                let view = view.clone();
                                move |checked, _, cx| {
                                    let _ = view.update(cx, |this, cx| {
                                        this.terms = checked;
                                        cx.notify();
                                    });
                                }
                            }),
                    )
                    .child(Checkbox::new("disabled").label("Disabled").disabled(true)),
            ))
            .child(section(
                "Indeterminate",
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(
                        Checkbox::new("channels-all")
                            .label("All channels")
                            .checked(all)
                            .indeterminate(checked > 0 && !all)
                            .on_change(move |checked, _, cx| {
                                let _ = view.update(cx, |this, cx| {
                                    this.channels = [checked; 3];
                                    cx.notify();
                                });
                            }),
                    )
                    .children(children),
            ))
    }
}

pub struct TagInputPage {
    basic: Entity<TagInput>,
    limited: Entity<TagInput>,
    tags: Vec<String>,
    _subscriptions: Vec<Subscription>,
}

impl TagInputPage {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let basic = cx.new(|cx| {
            TagInput::new("tags-basic", TagState::new(vec!["rust".to_string()]), cx)
        });
        let limited = cx.new(|cx| {
            let state = TagState::new(Vec::new())
                .max_tags(5)
                .suggestions(
                    ["design", "development", "documentation", "devops", "testing", "marketing"]
                        .into_iter()
                        .map(String::from)
                        .collect(),
                )
                .validate(|tag| {
                    if tag.chars().all(|c| c.is_alphanumeric() || c == '-') {
                        Ok(())
                    } else {
                        Err("Only letters, digits and dashes".to_string())
                    }
                });
            TagInput::new("tags-limited", state, cx).placeholder("Add up to 5 topics")
        });

        let _subscriptions = vec![cx.subscribe(&basic, |this, _, event: &TagsChanged, cx| {
            this.tags = event.0.clone();
            cx.notify();
        })];

        Self {
            basic,
            limited,
            tags: vec!["rust".to_string()],
            _subscriptions,
        }
    }
}

impl Render for TagInputPage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        page("Tag Input", "Free-form tags with suggestions, limits and validation.")
            .child(section(
                "Basic",
                div()
                    .w_96()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(self.basic.clone())
                    .child(caption(format!("Tags: [{}]", self.tags.join(", ")))),
            ))
            .child(section(
                "Suggestions and limit",
                div().w_96().child(self.limited.clone()),
            ))
    }
}

/// How long the example search takes to "return"
const SIMULATED_SEARCH: Duration = Duration::from_millis(800);

pub struct SearchBarPage {
    search: Entity<SearchBar>,
    result: Option<String>,
    _search_task: Option<Task<()>>,
    _subscriptions: Vec<Subscription>,
}

impl SearchBarPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let debounce = entities.settings.read(cx).search_debounce_ms;
        let state = SearchState::new(entities.storage.clone())
            .debounce(Duration::from_millis(debounce))
            .show_recent();
        let search = cx.new(|cx| {
            SearchBar::new("search-demo", state, cx).placeholder("Search components...")
        });

        let _subscriptions = vec![cx.subscribe(&search, |this, search, event: &SearchEvent, cx| {
            if let SearchEvent::Submitted(query) = event {
                this.run_search(query.clone(), search, cx);
            }
        })];

        Self {
            search,
            result: None,
            _search_task: None,
            _subscriptions,
        }
    }

    fn run_search(&mut self, query: String, search: Entity<SearchBar>, cx: &mut Context<Self>) {
        search.update(cx, |search, cx| search.set_loading(true, cx));
        self._search_task = Some(cx.spawn(async move |this, cx| {
            cx.background_executor().timer(SIMULATED_SEARCH).await;
            let _ = this.update(cx, |this, cx| {
                search.update(cx, |search, cx| search.set_loading(false, cx));
                this.result = Some(query);
                cx.notify();
            });
        }));
    }
}

impl Render for SearchBarPage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        page("Search Bar", "Debounced search with recent searches.")
            .child(section(
                "With recent searches",
                div()
                    .w_96()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(self.search.clone())
                    .child(caption(match &self.result {
                        Some(query) => format!("Results for \"{query}\""),
                        None => "Focus the field to see recent searches".to_string(),
                    })),
            ))
    }
}
