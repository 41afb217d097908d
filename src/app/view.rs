use super::messages::Message;
use super::state::{App, HERO_SECTION_HEIGHT_PX, PAGE_SCROLL_ID};
use crate::portfolio::PortfolioItem;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Row, button, column, container, horizontal_space, row, scrollable, text};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let page = column![self.hero_section(), self.gallery_section()]
            .spacing(24)
            .padding(16)
            .width(Length::Fill);

        scrollable(page)
            .on_scroll(|viewport| Message::Scrolled {
                offset: viewport.relative_offset(),
                viewport_width: viewport.bounds().width,
                viewport_height: viewport.bounds().height,
                content_width: viewport.content_bounds().width,
                content_height: viewport.content_bounds().height,
            })
            .id(PAGE_SCROLL_ID.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn hero_section(&self) -> Element<'_, Message> {
        let mut hero = column![text(&self.header.title).size(40)]
            .spacing(12)
            .align_x(Horizontal::Center)
            .width(Length::Fill);

        if !self.header.tagline.is_empty() {
            hero = hero.push(text(&self.header.tagline).size(18));
        }
        hero = hero.push(button("Explore My Projects").on_press(Message::ExplorePressed));

        container(hero)
            .width(Length::Fill)
            .height(Length::Fixed(HERO_SECTION_HEIGHT_PX))
            .padding(48)
            .into()
    }

    fn gallery_section(&self) -> Element<'_, Message> {
        let mut section = column![self.gallery_grid()].spacing(20).width(Length::Fill);
        // An empty collection leaves the section inert: no page controls.
        if !self.gallery.items.is_empty() {
            section = section.push(self.pagination_controls());
        }
        section.into()
    }

    fn gallery_grid(&self) -> Element<'_, Message> {
        match self.masonry_lanes() {
            Some(grid) => {
                let mut lanes: Row<'_, Message> = Row::new().spacing(16).width(Length::Fill);
                for lane in grid.columns() {
                    let mut cards: Column<'_, Message> =
                        Column::new().spacing(16).width(Length::FillPortion(1));
                    for index in lane {
                        // The grid may still hold cards from the previous
                        // page; only currently visible items are rendered.
                        if let Some(item) =
                            self.gallery.items.get(*index).filter(|item| item.visible)
                        {
                            cards = cards.push(self.item_card(item));
                        }
                    }
                    lanes = lanes.push(cards);
                }
                lanes.into()
            }
            None => {
                let mut rows: Column<'_, Message> = Column::new().spacing(16).width(Length::Fill);
                for chunk in self.gallery.visible_indices().chunks(3) {
                    let mut cards: Row<'_, Message> = Row::new().spacing(16).width(Length::Fill);
                    for index in chunk {
                        cards = cards.push(
                            container(self.item_card(&self.gallery.items[*index]))
                                .width(Length::FillPortion(1)),
                        );
                    }
                    rows = rows.push(cards);
                }
                rows.into()
            }
        }
    }

    fn item_card<'a>(&self, item: &'a PortfolioItem) -> Element<'a, Message> {
        let mut body = column![text(&item.title).size(18)].spacing(6);
        if let Some(category) = &item.category {
            body = body.push(text(category).size(13));
        }
        if !item.description.is_empty() {
            body = body.push(text(&item.description).size(14));
        }

        container(body)
            .padding(12)
            .width(Length::Fill)
            .style(container::bordered_box)
            .into()
    }

    fn pagination_controls(&self) -> Element<'_, Message> {
        let prev_button = if self.current_page() > 1 {
            button("Previous").on_press(Message::PreviousPage)
        } else {
            button("Previous")
        };

        let next_button = if self.current_page() < self.total_pages() {
            button("Next").on_press(Message::NextPage)
        } else {
            button("Next")
        };

        let mut numbers: Row<'_, Message> = Row::new().spacing(6);
        for page in 1..=self.total_pages() {
            let style: fn(&iced::Theme, button::Status) -> button::Style =
                if page == self.current_page() {
                    button::primary
                } else {
                    button::secondary
                };
            numbers = numbers.push(
                button(text(page.to_string()))
                    .style(style)
                    .on_press(Message::PageSelected(page)),
            );
        }

        let refresh_button = if self.refreshing {
            button("Refresh")
        } else {
            button("Refresh").on_press(Message::RefreshRequested)
        };

        row![
            prev_button,
            numbers,
            next_button,
            horizontal_space(),
            refresh_button
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill)
        .into()
    }
}
