use bevy::prelude::*;
use bevy::tasks::{AsyncComputeTaskPool, Task, block_on, poll_once};
use bevy::window::PrimaryWindow;
use planets_core::{Body, MAX_INPUT_VALUE, SimConfig, SimError, WindowPreset};
use planets_physics::scenario;
pub use planets_sim::state::AppState;
use planets_sim::simulation::SimulationState;

pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SetupForm>()
            .add_systems(OnEnter(AppState::Menu), spawn_menu)
            .add_systems(OnExit(AppState::Menu), despawn_menu)
            .add_systems(
                Update,
                (form_input_system, refresh_form_text.after(form_input_system))
                    .run_if(in_state(AppState::Menu)),
            )
            .add_systems(OnEnter(AppState::Loading), spawn_loading_screen)
            .add_systems(OnExit(AppState::Loading), despawn_loading_screen)
            .add_systems(
                Update,
                loading_poll_system.run_if(in_state(AppState::Loading)),
            );
    }
}

const INVALID_VALUE: &str = "Please enter a valid value";

/// Longest number the form accepts; MAX_INPUT_VALUE has 8 digits
const MAX_DIGITS: usize = 8;

// --- Form ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Window,
    MaxRadius,
    BodyCount,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Self::Window => Self::MaxRadius,
            Self::MaxRadius => Self::BodyCount,
            Self::BodyCount => Self::Window,
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::Window => Self::BodyCount,
            Self::MaxRadius => Self::Window,
            Self::BodyCount => Self::MaxRadius,
        }
    }
}

/// The three setup questions: window type, max radius, body count
#[derive(Resource, Debug, Clone)]
pub struct SetupForm {
    pub window: WindowPreset,
    pub max_radius: String,
    pub body_count: String,
    pub selected: Field,
    pub error: Option<String>,
}

impl Default for SetupForm {
    fn default() -> Self {
        let config = SimConfig::default();
        Self {
            window: config.window,
            max_radius: config.max_radius.to_string(),
            body_count: config.body_count.to_string(),
            selected: Field::Window,
            error: None,
        }
    }
}

impl SetupForm {
    pub fn push_digit(&mut self, digit: char) {
        if let Some(value) = self.selected_number_mut() {
            if value.len() < MAX_DIGITS {
                value.push(digit);
            }
        }
    }

    pub fn pop_digit(&mut self) {
        if let Some(value) = self.selected_number_mut() {
            value.pop();
        }
    }

    fn selected_number_mut(&mut self) -> Option<&mut String> {
        match self.selected {
            Field::Window => None,
            Field::MaxRadius => Some(&mut self.max_radius),
            Field::BodyCount => Some(&mut self.body_count),
        }
    }

    /// Config for the next scenario; everything the form does not ask about
    /// is carried over from `base`
    pub fn to_config(&self, base: &SimConfig) -> Result<SimConfig, String> {
        let config = SimConfig {
            window: self.window,
            max_radius: parse_input(&self.max_radius)?,
            body_count: parse_input(&self.body_count)?,
            ..base.clone()
        };
        config.validate().map_err(|_| INVALID_VALUE.to_string())?;
        Ok(config)
    }

    fn line(&self, field: Field) -> String {
        let cursor = if self.selected == field { ">" } else { " " };
        match field {
            Field::Window => format!("{cursor} Window:      < {} >", self.window.name()),
            Field::MaxRadius => format!("{cursor} Max radius:  {}_", self.max_radius),
            Field::BodyCount => format!("{cursor} Body count:  {}_", self.body_count),
        }
    }
}

fn parse_input(value: &str) -> Result<u32, String> {
    match value.parse::<u32>() {
        Ok(n) if (1..=MAX_INPUT_VALUE).contains(&n) => Ok(n),
        _ => Err(INVALID_VALUE.to_string()),
    }
}

// --- Markers ---

#[derive(Component)]
struct MenuRoot;

#[derive(Component)]
struct FieldText(Field);

#[derive(Component)]
struct ErrorText;

#[derive(Component)]
struct LoadingRoot;

#[derive(Resource)]
struct ScenarioTask(Task<ScenarioResult>);

struct ScenarioResult {
    config: SimConfig,
    bodies: Result<Vec<Body>, SimError>,
}

// --- Menu ---

fn spawn_menu(mut commands: Commands, form: Res<SetupForm>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(14.0),
                ..default()
            },
            MenuRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("PLANETS"),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));

            parent.spawn((
                Text::new("Gravity sandbox"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgba(0.6, 0.9, 1.0, 0.7)),
            ));

            // Spacer
            parent.spawn(Node {
                height: Val::Px(30.0),
                ..default()
            });

            for field in [Field::Window, Field::MaxRadius, Field::BodyCount] {
                parent.spawn((
                    Text::new(form.line(field)),
                    TextFont {
                        font_size: 28.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    FieldText(field),
                ));
            }

            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.35, 0.3)),
                ErrorText,
            ));

            parent.spawn((
                Text::new("[Up/Down] Field  [Left/Right] Window  [0-9] Edit  [Enter] Start"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.6)),
            ));
        });
}

fn despawn_menu(mut commands: Commands, query: Query<Entity, With<MenuRoot>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

const DIGIT_KEYS: [(KeyCode, KeyCode, char); 10] = [
    (KeyCode::Digit0, KeyCode::Numpad0, '0'),
    (KeyCode::Digit1, KeyCode::Numpad1, '1'),
    (KeyCode::Digit2, KeyCode::Numpad2, '2'),
    (KeyCode::Digit3, KeyCode::Numpad3, '3'),
    (KeyCode::Digit4, KeyCode::Numpad4, '4'),
    (KeyCode::Digit5, KeyCode::Numpad5, '5'),
    (KeyCode::Digit6, KeyCode::Numpad6, '6'),
    (KeyCode::Digit7, KeyCode::Numpad7, '7'),
    (KeyCode::Digit8, KeyCode::Numpad8, '8'),
    (KeyCode::Digit9, KeyCode::Numpad9, '9'),
];

fn form_input_system(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut form: ResMut<SetupForm>,
    mut next_state: ResMut<NextState<AppState>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    simulation: Res<SimulationState>,
) {
    if keyboard.just_pressed(KeyCode::ArrowDown) || keyboard.just_pressed(KeyCode::Tab) {
        form.selected = form.selected.next();
    }
    if keyboard.just_pressed(KeyCode::ArrowUp) {
        form.selected = form.selected.previous();
    }
    if form.selected == Field::Window
        && (keyboard.just_pressed(KeyCode::ArrowLeft) || keyboard.just_pressed(KeyCode::ArrowRight))
    {
        form.window = form.window.toggled();
    }
    for (key, numpad, digit) in DIGIT_KEYS {
        if keyboard.just_pressed(key) || keyboard.just_pressed(numpad) {
            form.push_digit(digit);
        }
    }
    if keyboard.just_pressed(KeyCode::Backspace) {
        form.pop_digit();
    }

    if !(keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::NumpadEnter)) {
        return;
    }

    let config = match form.to_config(&simulation.config) {
        Ok(config) => config,
        Err(message) => {
            form.error = Some(message);
            return;
        }
    };
    form.error = None;

    if let Ok(mut window) = windows.get_single_mut() {
        let [width, height] = config.window.size();
        window.resolution.set(width as f32, height as f32);
    }

    let pool = AsyncComputeTaskPool::get();
    let task = pool.spawn(async move {
        let mut rng = scenario::rng_for(&config);
        let bodies = scenario::generate_bodies(&config, &mut rng);
        ScenarioResult { config, bodies }
    });
    commands.insert_resource(ScenarioTask(task));
    next_state.set(AppState::Loading);
}

fn refresh_form_text(
    form: Res<SetupForm>,
    mut fields: Query<(&mut Text, &FieldText), Without<ErrorText>>,
    mut errors: Query<&mut Text, With<ErrorText>>,
) {
    if !form.is_changed() {
        return;
    }
    for (mut text, field) in &mut fields {
        **text = form.line(field.0);
    }
    if let Ok(mut text) = errors.get_single_mut() {
        **text = form.error.clone().unwrap_or_default();
    }
}

// --- Loading screen ---

fn spawn_loading_screen(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            LoadingRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Placing planets..."),
                TextFont {
                    font_size: 32.0,
                    ..default()
                },
                TextColor(Color::srgba(0.6, 0.9, 1.0, 0.9)),
            ));
        });
}

fn despawn_loading_screen(mut commands: Commands, query: Query<Entity, With<LoadingRoot>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

fn loading_poll_system(
    mut commands: Commands,
    task: Option<ResMut<ScenarioTask>>,
    mut next_state: ResMut<NextState<AppState>>,
    mut simulation: ResMut<SimulationState>,
    mut form: ResMut<SetupForm>,
) {
    let Some(mut scenario_task) = task else { return };

    let Some(result) = block_on(poll_once(&mut scenario_task.0)) else {
        return;
    };
    commands.remove_resource::<ScenarioTask>();

    match result.bodies {
        Ok(bodies) => {
            let [width, height] = result.config.window.size();
            info!(
                "Scenario generated: {} bodies, max radius {}, {}x{}, seed {:?}",
                bodies.len(),
                result.config.max_radius,
                width,
                height,
                result.config.seed
            );
            simulation.replace_bodies(result.config, bodies);
            next_state.set(AppState::Running);
        }
        Err(e) => {
            error!("Failed to generate scenario: {e}");
            form.error = Some(INVALID_VALUE.to_string());
            next_state.set(AppState::Menu);
        }
    }
}
