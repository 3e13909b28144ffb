use bevy::prelude::*;

use super::state::{ArrangeAction, ArrangeState};

#[derive(Component)]
pub struct ArrangeToggleButton;
#[derive(Component)]
pub struct ArrangeToggleLabel;
#[derive(Component)]
pub struct ResetPositionsButton;
#[derive(Component)]
pub struct ArrangeHint;

const BUTTON_IDLE: Color = Color::srgb(0.22, 0.24, 0.28);
const BUTTON_HOVER: Color = Color::srgb(0.26, 0.28, 0.32);
const BUTTON_PRESSED: Color = Color::srgb(0.18, 0.20, 0.24);
const BUTTON_ACTIVE: Color = Color::srgb(0.42, 0.30, 0.18);

fn toggle_label(active: bool) -> &'static str {
    if active { "✓ Done Arranging" } else { "↔ Arrange Items" }
}

// Top-left toolbar: arrange toggle, reset, and a hint while arranging
pub fn spawn_arrange_ui(mut commands: Commands) {
    let button_node = Node {
        padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
        margin: UiRect::right(Val::Px(8.0)),
        ..default()
    };

    commands
        .spawn((
            Name::new("ArrangeToolbar"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(12.0),
                left: Val::Px(12.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|toolbar| {
            toolbar.spawn(Node::default()).with_children(|row| {
                row.spawn((
                    Button,
                    ArrangeToggleButton,
                    BackgroundColor(BUTTON_IDLE),
                    button_node.clone(),
                ))
                .with_children(|b| {
                    b.spawn((
                        ArrangeToggleLabel,
                        Text::new(toggle_label(false)),
                        TextFont { font_size: 15.0, ..default() },
                        TextColor(Color::WHITE),
                    ));
                });

                row.spawn((
                    Button,
                    ResetPositionsButton,
                    BackgroundColor(Color::srgb(0.28, 0.10, 0.10)),
                    Node { display: Display::None, ..button_node },
                ))
                .with_children(|b| {
                    b.spawn((
                        Text::new("Reset Positions"),
                        TextFont { font_size: 15.0, ..default() },
                        TextColor(Color::WHITE),
                    ));
                });
            });

            toolbar.spawn((
                ArrangeHint,
                Text::new("Drag books and items to rearrange them on the shelf"),
                TextFont { font_size: 14.0, ..default() },
                TextColor(Color::srgb(0.85, 0.78, 0.65)),
                Node { display: Display::None, ..default() },
            ));
        });
}

pub fn arrange_toggle_interaction(
    mut q: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<Button>, With<ArrangeToggleButton>)>,
    state: Res<ArrangeState>,
    mut actions: EventWriter<ArrangeAction>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                actions.write(ArrangeAction::Toggle);
                *bg = BackgroundColor(BUTTON_PRESSED);
            }
            Interaction::Hovered => *bg = BackgroundColor(BUTTON_HOVER),
            Interaction::None => {
                *bg = BackgroundColor(if state.active { BUTTON_ACTIVE } else { BUTTON_IDLE })
            }
        }
    }
}

pub fn reset_positions_interaction(
    mut q: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<Button>, With<ResetPositionsButton>)>,
    mut actions: EventWriter<ArrangeAction>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                actions.write(ArrangeAction::ResetPositions);
                *bg = BackgroundColor(Color::srgb(0.20, 0.12, 0.12));
            }
            Interaction::Hovered => *bg = BackgroundColor(Color::srgb(0.34, 0.14, 0.14)),
            Interaction::None => *bg = BackgroundColor(Color::srgb(0.28, 0.10, 0.10)),
        }
    }
}

pub fn reflect_arrange_state(
    state: Res<ArrangeState>,
    mut labels: Query<&mut Text, With<ArrangeToggleLabel>>,
    mut toggles: Query<&mut BackgroundColor, With<ArrangeToggleButton>>,
    mut arrange_only: Query<&mut Node, Or<(With<ResetPositionsButton>, With<ArrangeHint>)>>,
) {
    if !state.is_changed() {
        return;
    }

    if let Ok(mut text) = labels.single_mut() {
        *text = Text::new(toggle_label(state.active));
    }
    if let Ok(mut bg) = toggles.single_mut() {
        *bg = BackgroundColor(if state.active { BUTTON_ACTIVE } else { BUTTON_IDLE });
    }
    let display = if state.active { Display::Flex } else { Display::None };
    for mut node in &mut arrange_only {
        node.display = display;
    }
}
