//! Content for the built-in desktop panes and the dialog factory for analysis results.

use coursedesk_app_contract::{
    ChromeOptions, CloseBehavior, DialogFactory, PaneContent, PaneId, PaneRect, PaneSpec,
};
use coursedesk_runtime::DesktopRuntimeContext;
use leptos::*;

const RESULTS_ICON: &str = "Icons/text.ico";
const RESULTS_GEOMETRY: PaneRect = PaneRect::new(150, 80, 700, 500);
const PROJECT2_SELECT_MENU: &str = "project2-select-menu";
const PROJECT2_PROPERTIES: &str = "properties-dialog-project2";
const PERSON_PROPERTIES: &str = "person-properties-dialog";

/// Parts offered by the Project 2 selection menu.
const PROJECT2_PARTS: [(u8, &str, &str); 4] = [
    (
        1,
        "Part 1: Uniform Distribution (M=4,6,8)",
        "Compare fixed-length vs Huffman coding",
    ),
    (
        2,
        "Part 2: Custom Distributions (Y & Z)",
        "Analyze non-uniform probability distributions",
    ),
    (
        3,
        "Part 3: Huffman Text Compression",
        "Upload a text file for Huffman analysis",
    ),
    (
        4,
        "Part 4: Shannon-Fano vs Huffman",
        "Upload a text file to compare both methods",
    ),
];

const NETWORK_MEMBERS: [&str; 3] = ["Team member 1", "Team member 2", "Team member 3"];

/// Entries of the Project 2 folder context menu, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FolderMenuItem {
    Open,
    Part(u8),
    Properties,
}

impl FolderMenuItem {
    fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Part(1) => "Part 1: Uniform Distribution",
            Self::Part(2) => "Part 2: Custom Distributions",
            Self::Part(3) => "Part 3: Huffman Compression",
            Self::Part(4) => "Part 4: Shannon-Fano vs Huffman",
            Self::Part(_) => "Unknown part",
            Self::Properties => "Properties",
        }
    }

    /// A separator is drawn above the first part and above Properties.
    fn starts_group(self) -> bool {
        matches!(self, Self::Part(1) | Self::Properties)
    }
}

fn project2_folder_menu() -> Vec<FolderMenuItem> {
    std::iter::once(FolderMenuItem::Open)
        .chain(PROJECT2_PARTS.iter().map(|(part, _, _)| FolderMenuItem::Part(*part)))
        .chain(std::iter::once(FolderMenuItem::Properties))
        .collect()
}

fn person_dialog_title(member: &str) -> String {
    format!("{member} Properties")
}

fn open_project2_part(runtime: DesktopRuntimeContext, part: u8) {
    runtime.open_dialog(&ResultsWindowFactory::new(
        2,
        part,
        part_placeholder_results(part),
    ));
}

/// Builds the results window for one part of a course project.
///
/// Results windows are created on demand and disposed when closed, so reopening a part always
/// starts from fresh output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsWindowFactory {
    pub project: u8,
    pub part: u8,
    pub results: String,
}

impl ResultsWindowFactory {
    pub fn new(project: u8, part: u8, results: impl Into<String>) -> Self {
        Self {
            project,
            part,
            results: results.into(),
        }
    }

    pub fn pane_id(&self) -> PaneId {
        PaneId::trusted(format!("result-window-project{}-part{}", self.project, self.part))
    }

    pub fn title(&self) -> String {
        format!("Project {} Part {} Results", self.project, self.part)
    }
}

impl DialogFactory for ResultsWindowFactory {
    fn build(&self) -> PaneSpec {
        let results = self.results.clone();
        PaneSpec {
            id: self.pane_id(),
            chrome: ChromeOptions::titled(self.title())
                .with_icon(RESULTS_ICON)
                .with_geometry(RESULTS_GEOMETRY)
                .with_close_behavior(CloseBehavior::Dispose),
            content: PaneContent::new(move || {
                view! { <pre class="results-text">{results.clone()}</pre> }.into_view()
            }),
        }
    }
}

fn part_placeholder_results(part: u8) -> String {
    let label = PROJECT2_PARTS
        .iter()
        .find(|(number, _, _)| *number == part)
        .map(|(_, label, _)| *label)
        .unwrap_or("Unknown part");
    format!("{label}\n\nNo analysis has been run yet.")
}

/// Attaches content to every catalog pane.
pub(crate) fn register_builtin_content(runtime: DesktopRuntimeContext) {
    let selected_member = create_rw_signal(None::<&'static str>);

    runtime.set_pane_content(
        PaneId::trusted("my-computer-window"),
        PaneContent::new(move || my_computer_view(runtime)),
    );
    runtime.set_pane_content(
        PaneId::trusted("my-network-window"),
        PaneContent::new(move || my_network_view(runtime, selected_member)),
    );
    runtime.set_pane_content(
        PaneId::trusted("minesweeper-window"),
        PaneContent::new(move || minesweeper_view(runtime)),
    );
    runtime.set_pane_content(
        PaneId::trusted("minesweeper-help-window"),
        PaneContent::new(minesweeper_help_view),
    );
    runtime.set_pane_content(
        PaneId::trusted(PROJECT2_PROPERTIES),
        PaneContent::new(move || {
            properties_view(
                runtime,
                PaneId::trusted(PROJECT2_PROPERTIES),
                "Project 2: source coding analysis with Huffman and Shannon-Fano codes.",
            )
        }),
    );
    runtime.set_pane_content(
        PaneId::trusted(PERSON_PROPERTIES),
        PaneContent::new(move || person_properties_view(runtime, selected_member)),
    );
    runtime.set_pane_content(
        PaneId::trusted(PROJECT2_SELECT_MENU),
        PaneContent::new(move || project2_select_view(runtime)),
    );
}

fn my_computer_view(runtime: DesktopRuntimeContext) -> View {
    let selected = create_rw_signal(None::<u8>);
    let menu_at = create_rw_signal(None::<(i32, i32)>);
    let folder_class = move |project: u8| {
        if selected.get() == Some(project) {
            "Folder selected"
        } else {
            "Folder"
        }
    };

    let run_menu_item = move |item: FolderMenuItem| {
        menu_at.set(None);
        match item {
            FolderMenuItem::Open => runtime.open_pane(PaneId::trusted(PROJECT2_SELECT_MENU)),
            FolderMenuItem::Part(part) => open_project2_part(runtime, part),
            FolderMenuItem::Properties => {
                runtime.present_pane(PaneId::trusted(PROJECT2_PROPERTIES));
            }
        }
    };

    view! {
        <div class="address-bar">{move || runtime.address_bar.get()}</div>
        <div class="content-items" on:click=move |_| menu_at.set(None)>
            {(1..=3u8)
                .map(|project| {
                    view! {
                        <div
                            id=format!("project{project}-folder")
                            class=move || folder_class(project)
                            on:click=move |_| selected.set(Some(project))
                            on:dblclick=move |_| {
                                if project == 2 {
                                    runtime.open_pane(PaneId::trusted(PROJECT2_SELECT_MENU));
                                }
                            }
                            on:contextmenu=move |ev: web_sys::MouseEvent| {
                                if project == 2 {
                                    ev.prevent_default();
                                    selected.set(Some(project));
                                    menu_at.set(Some((ev.client_x(), ev.client_y())));
                                }
                            }
                        >
                            <img src="Icons/HardDrive.ico" alt="" />
                            <span>{format!("Project {project}")}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
        <Show when=move || menu_at.get().is_some()>
            <div
                class="context-menu"
                role="menu"
                style=move || {
                    let (left, top) = menu_at.get().unwrap_or_default();
                    format!("display:block;position:fixed;left:{left}px;top:{top}px;")
                }
            >
                {project2_folder_menu()
                    .into_iter()
                    .map(|item| {
                        view! {
                            {item
                                .starts_group()
                                .then(|| view! { <div class="context-menu-separator"></div> })}
                            <div
                                class="context-menu-item"
                                role="menuitem"
                                on:click=move |_| run_menu_item(item)
                            >
                                {item.label()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Show>
    }
    .into_view()
}

fn my_network_view(
    runtime: DesktopRuntimeContext,
    selected_member: RwSignal<Option<&'static str>>,
) -> View {
    view! {
        <div class="content-items">
            {NETWORK_MEMBERS
                .into_iter()
                .map(|member| {
                    view! {
                        <div
                            class="Folder person-folder"
                            on:dblclick=move |_| {
                                selected_member.set(Some(member));
                                let dialog = PaneId::trusted(PERSON_PROPERTIES);
                                runtime.set_pane_title(
                                    dialog.clone(),
                                    person_dialog_title(member),
                                );
                                runtime.present_pane(dialog);
                            }
                        >
                            <img src="Icons/person.ico" alt="" />
                            <span>{member}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}

fn minesweeper_view(runtime: DesktopRuntimeContext) -> View {
    view! {
        <div class="minesweeper-menu">
            <button on:click=move |_| {
                runtime.open_pane(PaneId::trusted("minesweeper-help-window"))
            }>"Help"</button>
        </div>
        <div class="minesweeper-board">
            {(0..81).map(|_| view! { <button class="cell" /> }).collect_view()}
        </div>
    }
    .into_view()
}

fn minesweeper_help_view() -> View {
    view! {
        <div class="help-text">
            <h3>"How to play"</h3>
            <p>"Left-click a square to uncover it. Numbers show how many mines touch that square."</p>
            <p>"Right-click a square to flag a suspected mine."</p>
        </div>
    }
    .into_view()
}

fn dialog_buttons(runtime: DesktopRuntimeContext, pane_id: PaneId) -> impl IntoView {
    let close = store_value(pane_id);
    view! {
        <div class="dialog-buttons">
            <button class="xp-button" on:click=move |_| runtime.close_pane(close.get_value())>
                "OK"
            </button>
            <button class="xp-button" on:click=move |_| runtime.close_pane(close.get_value())>
                "Cancel"
            </button>
        </div>
    }
}

fn properties_view(runtime: DesktopRuntimeContext, pane_id: PaneId, body: &'static str) -> View {
    view! {
        <div class="properties-body">
            <p>{body}</p>
        </div>
        {dialog_buttons(runtime, pane_id)}
    }
    .into_view()
}

fn person_properties_view(
    runtime: DesktopRuntimeContext,
    selected_member: RwSignal<Option<&'static str>>,
) -> View {
    view! {
        <div class="properties-body">
            <p>{move || selected_member.get().unwrap_or("No member selected")}</p>
        </div>
        {dialog_buttons(runtime, PaneId::trusted(PERSON_PROPERTIES))}
    }
    .into_view()
}

fn project2_select_view(runtime: DesktopRuntimeContext) -> View {
    let selected = create_rw_signal(None::<u8>);

    let open_part = move |part: u8| {
        runtime.close_pane(PaneId::trusted(PROJECT2_SELECT_MENU));
        open_project2_part(runtime, part);
    };

    view! {
        <div class="select-menu">
            <h3>"Select Analysis Part:"</h3>
            {PROJECT2_PARTS
                .into_iter()
                .map(|(part, label, hint)| {
                    view! {
                        <div
                            class=move || {
                                if selected.get() == Some(part) {
                                    "Folder part-option selected"
                                } else {
                                    "Folder part-option"
                                }
                            }
                            on:click=move |_| selected.set(Some(part))
                            on:dblclick=move |_| open_part(part)
                        >
                            <img src="Icons/text.ico" alt="" />
                            <strong>{label}</strong>
                            <span>{hint}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn results_factory_builds_disposable_pane() {
        let factory = ResultsWindowFactory::new(2, 3, "H(X) = 1.75 bits");
        let spec = factory.build();

        assert_eq!(spec.id.as_str(), "result-window-project2-part3");
        assert_eq!(spec.chrome.title, "Project 2 Part 3 Results");
        assert_eq!(spec.chrome.initial_geometry, Some(PaneRect::new(150, 80, 700, 500)));
        assert_eq!(spec.chrome.icon_ref.as_deref(), Some("Icons/text.ico"));
        assert_eq!(spec.chrome.close_behavior, CloseBehavior::Dispose);
    }

    #[test]
    fn results_ids_are_valid_pane_ids() {
        for part in 1..=4 {
            let id = ResultsWindowFactory::new(2, part, "").pane_id();
            assert!(PaneId::new(id.as_str()).is_ok());
        }
    }

    #[test]
    fn folder_menu_lists_open_parts_then_properties() {
        let menu = project2_folder_menu();

        assert_eq!(
            menu,
            vec![
                FolderMenuItem::Open,
                FolderMenuItem::Part(1),
                FolderMenuItem::Part(2),
                FolderMenuItem::Part(3),
                FolderMenuItem::Part(4),
                FolderMenuItem::Properties,
            ]
        );
        let separators: Vec<&str> = menu
            .iter()
            .filter(|item| item.starts_group())
            .map(|item| item.label())
            .collect();
        assert_eq!(separators, vec!["Part 1: Uniform Distribution", "Properties"]);
    }

    #[test]
    fn person_dialog_is_titled_after_the_member() {
        assert_eq!(
            person_dialog_title("Team member 2"),
            "Team member 2 Properties"
        );
    }

    #[test]
    fn placeholder_results_name_the_part() {
        assert!(part_placeholder_results(4).starts_with("Part 4: Shannon-Fano vs Huffman"));
        assert!(part_placeholder_results(9).starts_with("Unknown part"));
    }
}
